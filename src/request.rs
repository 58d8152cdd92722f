//! Parsed verbs handed from the command line to the dispatcher

use crate::error::XeError;

/// Sub-modes of `xe prisma`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrismaAction {
    /// generate, then push the schema, then pull it back
    Sync,
    /// `migrate dev` under the given name, or a timestamped one
    Migrate { name: Option<String> },
    Reset,
}

/// Sub-modes of `xe shadcn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadcnAction {
    Init,
    Add { component: String },
}

/// A single top-level request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Install everything when `packages` is empty, otherwise add the packages in order.
    Install { packages: Vec<String> },
    Dev,
    DevInit,
    Build,
    Lint,
    Prisma(PrismaAction),
    Shadcn(ShadcnAction),
}

pub const PRISMA_USAGE: &str = "xe prisma [migrate [--name NAME] | reset]";
pub const SHADCN_USAGE: &str = "xe shadcn (init | add COMPONENT)";

impl PrismaAction {
    /// Build a prisma action from an optional sub-verb and `--name`.
    ///
    /// # Errors
    ///
    /// Returns `XeError::Usage` for an unknown sub-verb or a `--name` outside of `migrate`.
    pub fn parse(action: Option<&str>, name: Option<String>) -> Result<Self, XeError> {
        let parsed = match action {
            None => PrismaAction::Sync,
            Some("migrate") => return Ok(PrismaAction::Migrate { name }),
            Some("reset") => PrismaAction::Reset,
            Some(other) => {
                return Err(XeError::Usage(format!(
                    "Unknown prisma command '{other}'. Usage: {PRISMA_USAGE}"
                )));
            }
        };
        if name.is_some() {
            return Err(XeError::Usage(format!(
                "--name is only valid with `prisma migrate`. Usage: {PRISMA_USAGE}"
            )));
        }
        Ok(parsed)
    }
}

impl ShadcnAction {
    /// Build a shadcn action from its sub-verb and remaining arguments.
    ///
    /// # Errors
    ///
    /// Returns `XeError::Usage` when the sub-verb is missing or unknown, when
    /// `add` has no component or more than one, or when `init` gets arguments.
    pub fn parse(action: Option<&str>, args: &[String]) -> Result<Self, XeError> {
        match (action, args) {
            (Some("init"), []) => Ok(ShadcnAction::Init),
            (Some("add"), [component]) => Ok(ShadcnAction::Add {
                component: component.clone(),
            }),
            (Some("add"), []) => Err(XeError::Usage(format!(
                "`shadcn add` needs a component name. Usage: {SHADCN_USAGE}"
            ))),
            (Some("add"), _) => Err(XeError::Usage(format!(
                "`shadcn add` takes exactly one component name. Usage: {SHADCN_USAGE}"
            ))),
            (Some("init"), _) => Err(XeError::Usage(format!(
                "`shadcn init` takes no arguments. Usage: {SHADCN_USAGE}"
            ))),
            (Some(other), _) => Err(XeError::Usage(format!(
                "Unknown shadcn command '{other}'. Usage: {SHADCN_USAGE}"
            ))),
            (None, _) => Err(XeError::Usage(format!("Usage: {SHADCN_USAGE}"))),
        }
    }
}
