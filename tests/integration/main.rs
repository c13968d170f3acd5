mod support;

mod record_creation;
mod recurrence_expansion;
mod rollover;
