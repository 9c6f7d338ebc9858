/// Generate a parameterless endpoint method that returns the list stored under
/// one envelope key.
macro_rules! borsdata_list_endpoint {
    (
        $(#[$meta:meta])*
        method: $name:ident -> $item:ty,
        path: $path:literal,
        envelope: $key:literal
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// Returns an error if the request fails or the body does not match the expected shape.
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(target = "borsdata::endpoints", skip(self))
        )]
        pub async fn $name(&self) -> Result<Vec<$item>, borsdata_core::BorsdataError> {
            self.get_list($path, borsdata_core::QueryParams::new(), $key)
                .await
        }
    };
}

/// Generate a batch endpoint method taking only an instrument list, returning
/// the per-instrument entries stored under one envelope key.
macro_rules! borsdata_batch_endpoint {
    (
        $(#[$meta:meta])*
        method: $name:ident -> $item:ty,
        path: $path:literal,
        envelope: $key:literal
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// Returns `InvalidArgument` for an empty list or more than 50 ids, before
        /// any request is made; otherwise as for any other request.
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "borsdata::endpoints",
                skip(self, instrument_ids),
                fields(instruments = instrument_ids.len()),
            )
        )]
        pub async fn $name(
            &self,
            instrument_ids: &[i64],
        ) -> Result<Vec<$item>, borsdata_core::BorsdataError> {
            let params = borsdata_core::QueryParams::new()
                .with("instList", $crate::endpoints::instrument_list(instrument_ids)?);
            self.get_list($path, params, $key).await
        }
    };
}
