pub mod rehearsal;

pub use rehearsal::{
    AiLineTicket,
    PracticeEffect,
    PracticeError,
    PracticeState,
    RehearsalSession,
};
