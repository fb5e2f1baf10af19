pub mod num_traits_impls;
pub mod std_ops;

#[cfg(feature = "nalgebra")]
pub mod simba_impls;
