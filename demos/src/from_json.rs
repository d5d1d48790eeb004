use std::io::Read;

use anyhow::Result;

use txdelay::prelude::*;

/// Reads the array parameters as JSON from stdin and prints the delays of a focus at 30 mm depth.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let param: TxParam = serde_json::from_str(&input)?;

    let (_, param) = tx_delay_with_param(param, &Focus::new(Point3::new(0., 0., 30. * mm)).into())?;
    println!("{}", serde_json::to_string_pretty(&param)?);

    Ok(())
}
