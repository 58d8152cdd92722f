use clap::Args;

use xe::error::XeError;
use xe::request::{ShadcnAction, Verb};

#[derive(Args, Debug)]
pub struct ShadcnArgs {
    /// `init` or `add`
    action: Option<String>,

    /// Component name for `add`
    args: Vec<String>,
}

impl ShadcnArgs {
    pub fn into_verb(self) -> Result<Verb, XeError> {
        ShadcnAction::parse(self.action.as_deref(), &self.args).map(Verb::Shadcn)
    }
}
