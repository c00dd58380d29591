use serde::{Deserialize, Serialize};
use sheetnest::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::BLFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct BLFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: BLFConfig,
}
