mod module_run_vm;
mod results_vm;
mod walkthrough_vm;

pub use module_run_vm::{ModuleCardVm, ModuleRunVm, RunIntent, RunPhase, map_module_card};
pub use results_vm::{ModuleOutcomeVm, ResultsVm, map_results};
pub use walkthrough_vm::{
    PillState, StepPillVm, WalkthroughIntent, WalkthroughVm, map_step_pills,
};
