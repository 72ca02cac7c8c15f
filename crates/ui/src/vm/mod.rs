mod question_vm;
mod results_vm;
mod start_vm;

pub use question_vm::{NavDotVm, OptionVm, QuestionVm, map_question};
pub use results_vm::{ResultsVm, map_results};
pub use start_vm::{CategoryOptionVm, StartVm, map_start};
