// glcaps/src/macros.rs
//
//! Macros.

// Declares a named `Feature` constant for every entry and collects all of them, in declaration
// order, into the `CATALOG` table.
macro_rules! feature_catalog {
    ($($(#[$attr:meta])* $name:ident => $extension:expr,)*) => {
        impl Feature {
            $(
                $(#[$attr])*
                pub const $name: Feature = Feature($extension);
            )*
        }

        pub(crate) static CATALOG: &[Feature] = &[$(Feature::$name,)*];
    }
}
