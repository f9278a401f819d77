use crate::{facts, info};

/// Prints a random space fact.
pub fn fact() {
    info!("{}", facts::random_fact());
}
