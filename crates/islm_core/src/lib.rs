pub mod curves;
pub mod equilibrium;
pub mod error;
pub mod markets;
pub mod params;
pub mod range;
pub mod scenario;
pub mod settings;
/// The `islm_core` crate provides the numeric engine behind the IS-LM explorer.
/// Every entry point is a pure function of its inputs: no global state, no I/O.
///
/// Key components:
/// - **Traits**: `LinearRelation` (a market-clearing line in `(Y, i)` space).
/// - **Markets**: `IsCurve` (goods market) and `LmCurve` (money market).
/// - **Equilibrium**: closed-form 2x2 solver with singularity detection.
/// - **Range / Curves**: plotting domain selection and curve sampling.
/// - **Scenario**: baseline vs. policy shock comparison.
pub mod traits;

pub use curves::{sample, sample_range, CurveSample, DEFAULT_SAMPLES};
pub use equilibrium::{solve, solve_with, Equilibrium, EquilibriumResult, LinearSystem};
pub use error::{ParameterError, SettingsError};
pub use params::{ModelParameters, PolicyShock};
pub use range::{select_range, select_range_with, PlotRange};
pub use scenario::{format_equilibrium, EquilibriumShift, PolicyScenario};
pub use settings::{ModelSettings, RangePolicy, SamplingSettings, SolverSettings};
