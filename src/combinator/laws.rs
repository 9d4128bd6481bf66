//! Law sheet for the outcome combinator algebra.
//!
//! This module documents every algebraic law the combinators commit to. Any
//! new combinator, and any change to an existing one, must keep these laws.
//!
//! # Law Classification
//!
//! - **Unconditional**: holds for all inputs and all closures that do not
//!   panic.
//! - **Conditional on mode**: holds only for a particular
//!   [`AggregateMode`](super::AggregateMode).
//!
//! # Law Sheet
//!
//! ## Functor / Monad (Unconditional)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | MAP-IDENTITY | `o.map(id) = o` |
//! | MAP-COMPOSE | `o.map(f).map(g) = o.map(g ∘ f)` |
//! | BIND-LEFT-ID | `Ok(v).bind(f) = f(v)` |
//! | BIND-RIGHT-ID | `o.bind(Ok) = o` |
//! | BIND-ASSOC | `o.bind(f).bind(g) = o.bind(\|v\| f(v).bind(g))` |
//!
//! ## Problem Propagation (Unconditional)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | SHORT-CIRCUIT | A chain failing at step k invokes exactly k factories |
//! | PRESERVE | `Problem(p).map(f)` holds the same allocation `p` |
//! | THEN-UNIT | `o.then_unit(\|_\| NO_PROBLEM) = o` |
//! | HOOKS | `o.on_success(a).on_problem(b) = o` |
//! | ENSURE-PASS | `o.ensure(\|_\| true, f) = o` |
//! | RESCUE-PASS | `o.rescue(\|_\| false, f) = o` |
//! | QUERY | `o.select_many(f, g) = o.bind(\|v\| f(&v).map(\|n\| g(v, n)))` |
//! | ASYNC | Lifting any chain into `AsyncOutcome` yields the same final outcome |
//!
//! ## Aggregation (Conditional on mode)
//!
//! | Law | Statement |
//! |-----|-----------|
//! | AGG-COLLECT | Collect-all reports every problem, in order, as one aggregate |
//! | AGG-BAIL | Bail-early reports the first problem and pulls nothing after it |

/// Identifies each law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// `o.map(id) = o`.
    MapIdentity,
    /// `o.map(f).map(g) = o.map(g ∘ f)`.
    MapComposition,
    /// `Ok(v).bind(f) = f(v)`.
    BindLeftIdentity,
    /// `o.bind(Ok) = o`.
    BindRightIdentity,
    /// `o.bind(f).bind(g) = o.bind(|v| f(v).bind(g))`.
    BindAssociativity,
    /// A chain failing at step k invokes exactly k factories.
    ShortCircuit,
    /// Problems pass through combinators as the same allocation.
    ProblemPreservation,
    /// A succeeding `then_unit` step returns the original outcome.
    ThenUnitPreservesValue,
    /// Hooks never change the outcome.
    HookTransparency,
    /// An accepting `ensure` is the identity.
    EnsurePassThrough,
    /// A declining `rescue` is the identity.
    RescuePassThrough,
    /// Query-style chains equal the explicit bind/map chain.
    QueryEquivalence,
    /// Collect-all aggregation reports every problem in order.
    AggregateCollectAll,
    /// Bail-early aggregation reports the first problem and stops pulling.
    AggregateBailEarly,
    /// The async overlay produces the same outcome as the sync chain.
    AsyncSyncEquivalence,
}

/// Whether a law holds for every input or only under a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawClassification {
    /// Holds for all inputs.
    Unconditional,
    /// Holds only for a particular aggregation mode.
    ConditionalOnMode,
}

/// A single entry in the law sheet.
#[derive(Debug, Clone)]
pub struct LawEntry {
    /// The law identifier.
    pub law: Law,
    /// How broadly the law applies.
    pub classification: LawClassification,
    /// Human-readable statement of the law.
    pub statement: &'static str,
}

const fn entry(law: Law, classification: LawClassification, statement: &'static str) -> LawEntry {
    LawEntry {
        law,
        classification,
        statement,
    }
}

/// The complete law sheet.
#[must_use]
pub fn law_sheet() -> Vec<LawEntry> {
    use Law::{
        AggregateBailEarly, AggregateCollectAll, AsyncSyncEquivalence, BindAssociativity,
        BindLeftIdentity, BindRightIdentity, EnsurePassThrough, HookTransparency, MapComposition,
        MapIdentity, ProblemPreservation, QueryEquivalence, RescuePassThrough, ShortCircuit,
        ThenUnitPreservesValue,
    };
    use LawClassification::{ConditionalOnMode, Unconditional};

    vec![
        entry(MapIdentity, Unconditional, "o.map(id) = o"),
        entry(MapComposition, Unconditional, "o.map(f).map(g) = o.map(g . f)"),
        entry(BindLeftIdentity, Unconditional, "Ok(v).bind(f) = f(v)"),
        entry(BindRightIdentity, Unconditional, "o.bind(Ok) = o"),
        entry(
            BindAssociativity,
            Unconditional,
            "o.bind(f).bind(g) = o.bind(|v| f(v).bind(g))",
        ),
        entry(
            ShortCircuit,
            Unconditional,
            "A chain failing at step k invokes exactly k factories",
        ),
        entry(
            ProblemPreservation,
            Unconditional,
            "Problem(p).map(f) holds the same allocation p",
        ),
        entry(
            ThenUnitPreservesValue,
            Unconditional,
            "o.then_unit(|_| NO_PROBLEM) = o",
        ),
        entry(HookTransparency, Unconditional, "o.on_success(a).on_problem(b) = o"),
        entry(EnsurePassThrough, Unconditional, "o.ensure(|_| true, f) = o"),
        entry(RescuePassThrough, Unconditional, "o.rescue(|_| false, f) = o"),
        entry(
            QueryEquivalence,
            Unconditional,
            "o.select_many(f, g) = o.bind(|v| f(&v).map(|n| g(v, n)))",
        ),
        entry(
            AsyncSyncEquivalence,
            Unconditional,
            "Lifting a chain into AsyncOutcome yields the same final outcome",
        ),
        entry(
            AggregateCollectAll,
            ConditionalOnMode,
            "CollectAll: every problem, in order, as one ProblemAggregate",
        ),
        entry(
            AggregateBailEarly,
            ConditionalOnMode,
            "BailEarly: the first problem, with no input pulled after it",
        ),
    ]
}

/// Returns only the unconditional laws from the sheet.
#[must_use]
pub fn unconditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification == LawClassification::Unconditional)
        .collect()
}

/// Returns only the conditional laws from the sheet.
#[must_use]
pub fn conditional_laws() -> Vec<LawEntry> {
    law_sheet()
        .into_iter()
        .filter(|e| e.classification != LawClassification::Unconditional)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
