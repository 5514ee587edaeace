#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;
#[cfg(feature = "ultraviolet")]
mod ultraviolet;

#[doc(hidden)]
#[macro_export]
macro_rules! impl_into_array {
    ([$scalar: ty; $dim: literal], $vector: ty) => {
        impl $crate::position::IntoArray for $vector {
            type Array = [$scalar; $dim];
        }
    };
}
