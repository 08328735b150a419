pub mod naive_array;
