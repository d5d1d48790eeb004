use anyhow::Result;

use txdelay::prelude::*;

pub fn diverging(param: &TxParam) -> Result<TxDelays> {
    let g = Diverging::new(10. * deg, 0. * deg, PI / 2.);
    let vs = g.virtual_source(param)?;
    println!("Virtual source: ({:.3}, {:.3}, {:.3}) mm", vs.x / mm, vs.y / mm, vs.z / mm);
    Ok(g.calc(param)?)
}
