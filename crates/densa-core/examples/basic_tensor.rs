//! Basic tensor construction and introspection.
//!
//! Run with: `cargo run --example basic_tensor -p densa-core`

use densa_core::{Tensor, TensorError};

fn main() -> anyhow::Result<()> {
    println!("=== densa-core: basic tensor ===\n");

    let tensor = Tensor::<f32>::new(&[3, 4, 5]);
    println!("new(&[3, 4, 5])");
    println!("  shape: {:?}", tensor.shape());
    println!("  rank:  {}", tensor.rank());
    println!("  len:   {}", tensor.len());
    println!("  bytes: {}", tensor.size_bytes());

    let mut zeros = Tensor::<f64>::zeros(&[2, 2]);
    zeros.as_mut_slice()[3] = 1.0;
    println!("\nzeros(&[2, 2]) after writing the last element:");
    println!("  {:?}", zeros);

    let scalar = Tensor::<i32>::new(&[]);
    let empty = Tensor::<i32>::new(&[0, 5]);
    println!("\nscalar: shape {:?}, len {}", scalar.shape(), scalar.len());
    println!("empty:  shape {:?}, len {}", empty.shape(), empty.len());

    let adopted = Tensor::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
    println!("\nfrom_vec: {:?}", adopted);

    match Tensor::<u8>::try_zeros(&[usize::MAX, 2]) {
        Err(e @ TensorError::ShapeOverflow { .. }) => println!("\ntry_zeros rejected: {e}"),
        Err(e) => return Err(e.into()),
        Ok(_) => anyhow::bail!("overflowing shape was accepted"),
    }

    Ok(())
}
