mod tests;

use anyhow::Result;

use txdelay::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // 3-MHz matrix array with 32x32 elements, pitch = 300 µm
    let param = TxParam::new(ElementGeometry::matrix(32, 32, 0.3 * mm)?)
        .with_element_size(0.25 * mm, 0.25 * mm);

    tests::run(&param)
}
