pub use crate::{
    beam::{Beam, DelayLaw, Diverging, DivergingOption, Focus, LineFocus, Plane},
    dispatch::Argument,
    tx_delay, tx_delay_with_param, TxParamExt,
};

pub use txdelay_core::prelude::*;
