use nalgebra::SVector;

impl<const D: usize, S: nalgebra::Scalar> crate::position::IntoArray for SVector<S, D> {
    type Array = [S; D];
}
