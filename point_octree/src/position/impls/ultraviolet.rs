use ultraviolet::{DVec3, Vec3};

crate::impl_into_array!([f32; 3], Vec3);
crate::impl_into_array!([f64; 3], DVec3);
