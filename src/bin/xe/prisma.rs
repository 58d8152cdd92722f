use clap::Args;

use xe::error::XeError;
use xe::request::{PrismaAction, Verb};

#[derive(Args, Debug)]
pub struct PrismaArgs {
    /// `migrate` or `reset`; omit to generate, push and pull
    action: Option<String>,

    /// Migration name (`migrate` only, defaults to migration_<unix seconds>)
    #[arg(long)]
    name: Option<String>,
}

impl PrismaArgs {
    pub fn into_verb(self) -> Result<Verb, XeError> {
        PrismaAction::parse(self.action.as_deref(), self.name).map(Verb::Prisma)
    }
}
