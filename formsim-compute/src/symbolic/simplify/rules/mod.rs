//! The rewriting rules used by the simplifier.
//!
//! A [`Rule`] only looks at the root of the expression it is given. If it matches, it returns the
//! rewritten expression along with the [`Step`] it took. Each submodule lists its rules in a
//! `RULES` table; [`apply`] tries the tables in order and stops at the first match.

pub mod add;
pub mod distribute;
pub mod expand;
pub mod multiply;
pub mod power;

use crate::symbolic::step_log::StepLog;
use super::{SymExpr, step::Step};

/// A single rewriting rule.
pub type Rule = fn(&SymExpr) -> Option<(SymExpr, Step)>;

/// Rule tables in the order they are tried. Rules that can only shrink an expression go before
/// the ones that can grow it.
const TABLES: [&[Rule]; 5] = [
    add::RULES,
    multiply::RULES,
    power::RULES,
    distribute::RULES,
    expand::RULES,
];

/// Rewrites the root of the expression with the first matching rule, and records its step.
pub fn apply(expr: &SymExpr, log: &mut dyn StepLog<Step>) -> Option<SymExpr> {
    let (rewritten, step) = TABLES.iter()
        .flat_map(|table| table.iter())
        .find_map(|rule| rule(expr))?;
    log.record(step);
    Some(rewritten)
}
