//! Static per-manager command templates
//!
//! Each verb has one table mapping the package manager to the program and the
//! fixed leading arguments. Free-form arguments are appended by the dispatcher.

use std::fmt;

use crate::manager::PackageManager;

/// A fully resolved external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn from_template(template: Template) -> Self {
        Invocation {
            program: template.program.to_string(),
            args: template.args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Append arguments, keeping their order.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Template {
    program: &'static str,
    args: &'static [&'static str],
}

const fn t(program: &'static str, args: &'static [&'static str]) -> Template {
    Template { program, args }
}

/// One template per manager, indexed in `PackageManager::ALL` order.
type Table = [Template; 3];

const INSTALL_ALL: Table = [
    t("bun", &["install"]),
    t("pnpm", &["install"]),
    t("npm", &["install"]),
];

const INSTALL_PACKAGES: Table = [t("bun", &["add"]), t("pnpm", &["add"]), t("npm", &["install"])];

const DEV: Table = [
    t("bun", &["run", "dev"]),
    t("pnpm", &["run", "dev"]),
    t("npm", &["run", "dev"]),
];

const BUILD: Table = [
    t("bun", &["run", "build"]),
    t("pnpm", &["run", "build"]),
    t("npm", &["run", "build"]),
];

const LINT: Table = [
    t("bun", &["run", "lint"]),
    t("pnpm", &["run", "lint"]),
    t("npm", &["run", "lint"]),
];

const PRISMA: Table = [
    t("bunx", &["prisma"]),
    t("pnpm", &["exec", "prisma"]),
    t("npx", &["prisma"]),
];

const SHADCN: Table = [
    t("bunx", &["shadcn@latest"]),
    t("pnpm", &["dlx", "shadcn@latest"]),
    t("npx", &["shadcn@latest"]),
];

fn lookup(table: &Table, manager: PackageManager) -> Invocation {
    let template = match manager {
        PackageManager::Bun => table[0],
        PackageManager::Pnpm => table[1],
        PackageManager::Npm => table[2],
    };
    Invocation::from_template(template)
}

#[must_use]
pub fn install_all(manager: PackageManager) -> Invocation {
    lookup(&INSTALL_ALL, manager)
}

#[must_use]
pub fn install_packages(manager: PackageManager, packages: &[String]) -> Invocation {
    lookup(&INSTALL_PACKAGES, manager).with_args(packages.iter().cloned())
}

#[must_use]
pub fn dev(manager: PackageManager) -> Invocation {
    lookup(&DEV, manager)
}

#[must_use]
pub fn build(manager: PackageManager) -> Invocation {
    lookup(&BUILD, manager)
}

#[must_use]
pub fn lint(manager: PackageManager) -> Invocation {
    lookup(&LINT, manager)
}

/// The schema tool through the manager's package runner, followed by `args`.
#[must_use]
pub fn prisma(manager: PackageManager, args: &[&str]) -> Invocation {
    lookup(&PRISMA, manager).with_args(args.iter().copied())
}

/// The UI component generator through the manager's package runner, followed by `args`.
#[must_use]
pub fn shadcn(manager: PackageManager, args: &[&str]) -> Invocation {
    lookup(&SHADCN, manager).with_args(args.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl Fn(PackageManager) -> Invocation) -> String {
        PackageManager::ALL
            .iter()
            .map(|m| f(*m).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_install_templates() {
        insta::assert_snapshot!(render(install_all), @r"
        bun install
        pnpm install
        npm install
        ");
        let packages = vec!["react".to_string(), "zod@3".to_string()];
        insta::assert_snapshot!(render(|m| install_packages(m, &packages)), @r"
        bun add react zod@3
        pnpm add react zod@3
        npm install react zod@3
        ");
    }

    #[test]
    fn test_script_templates() {
        insta::assert_snapshot!(render(dev), @r"
        bun run dev
        pnpm run dev
        npm run dev
        ");
        assert_eq!(build(PackageManager::Pnpm).to_string(), "pnpm run build");
        assert_eq!(lint(PackageManager::Bun).to_string(), "bun run lint");
    }

    #[test]
    fn test_runner_templates() {
        insta::assert_snapshot!(render(|m| prisma(m, &["db", "push"])), @r"
        bunx prisma db push
        pnpm exec prisma db push
        npx prisma db push
        ");
        insta::assert_snapshot!(render(|m| shadcn(m, &["add", "button"])), @r"
        bunx shadcn@latest add button
        pnpm dlx shadcn@latest add button
        npx shadcn@latest add button
        ");
    }
}
