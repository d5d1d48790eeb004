mod diverging;

use anyhow::Result;

use txdelay::prelude::*;

fn summary(name: &str, delays: &TxDelays) {
    let order = delays.firing_order();
    println!(
        "{}: {} elements, span = {:.3} µs, first = #{}, last = #{}",
        name,
        delays.len(),
        delays.span() * 1e6,
        order.first().copied().unwrap_or_default(),
        order.last().copied().unwrap_or_default(),
    );
}

pub fn run(param: &TxParam) -> Result<()> {
    type Test = (&'static str, fn(&TxParam) -> Result<TxDelays>);

    let tests: Vec<Test> = vec![
        ("Single focus", focus::focus),
        ("Focus line", line::line),
        ("Tilted plane wave", plane::plane),
        ("Diverging wave", diverging::diverging),
    ];

    tests.into_iter().try_for_each(|(name, f)| {
        let delays = f(param)?;
        summary(name, &delays);
        Ok(())
    })
}
