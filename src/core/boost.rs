use crate::app::{EngageAction, MemoryTaskExecutor, NoopAction};
use crate::core::sequence::{SequenceRunner, Step};
use crate::domain::ports::{Announcer, TaskExecutor};

pub const OPENING: &str = "Neuro-AI Boost: Cerebrospinal Synchronization Sequence Initiated...";
pub const CONNECT: &str = "Establishing Neural Lattice Synchronization...";
pub const UPGRADE: &str = "Initiating Human Memory Pulsar Induction...";
pub const PERFORM_TASKS: &str = "Engaging in Hypercognitive Operations...";
pub const CLEANUP: &str = "Initiating Neural Detox Sequence...";
pub const CLOSING: &str = "Neuro-AI Boost: Cerebrospinal Synchronization Sequence Terminated.";

/// 單次執行在 stdout 上的完整內容，逐行列出
pub const TRANSCRIPT: [&str; 6] = [OPENING, CONNECT, UPGRADE, PERFORM_TASKS, CLEANUP, CLOSING];

/// 以指定的 TaskExecutor 組裝 Neuro-AI Boost 序列
pub fn neuro_boost_sequence<A, E>(announcer: A, executor: E) -> SequenceRunner<A>
where
    A: Announcer,
    E: TaskExecutor + 'static,
{
    SequenceRunner::new(announcer, OPENING, CLOSING)
        .with_step(Step::new("connect", CONNECT, Box::new(NoopAction::connect())))
        .with_step(Step::new("upgrade", UPGRADE, Box::new(NoopAction::upgrade())))
        .with_step(Step::new(
            "perform_tasks",
            PERFORM_TASKS,
            Box::new(EngageAction::new(executor)),
        ))
        .with_step(Step::new("cleanup", CLEANUP, Box::new(NoopAction::cleanup())))
}

pub fn default_sequence<A: Announcer>(announcer: A) -> SequenceRunner<A> {
    neuro_boost_sequence(announcer, MemoryTaskExecutor::new())
}

/// 預期的 stdout 內容（每行以換行結尾）
pub fn expected_transcript() -> String {
    TRANSCRIPT.iter().map(|line| format!("{}\n", line)).collect()
}
