mod quiz_vm;

pub use quiz_vm::{
    OptionState, OptionVm, QuizIntent, QuizVm, ResultVm, ReviewEntryVm, ReviewOptionVm,
};
