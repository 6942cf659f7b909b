use crate::domain::ports::Announcer;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 將狀態訊息逐行寫到 stdout
#[derive(Debug, Clone, Default)]
pub struct StdoutAnnouncer;

impl StdoutAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl Announcer for StdoutAnnouncer {
    async fn announce(&self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        handle.flush()?;
        Ok(())
    }
}

/// 記憶體內的 announcer，收集輸出行供測試與嵌入使用
#[derive(Debug, Clone, Default)]
pub struct MemoryAnnouncer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 共用既有的緩衝區，讓其他協作者寫入同一份紀錄
    pub fn with_buffer(lines: Arc<Mutex<Vec<String>>>) -> Self {
        Self { lines }
    }

    // 鎖被毒化時仍取回資料，不遺失任何一行
    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// 以換行串接，與 stdout 上的位元組一致
    pub fn transcript(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl Announcer for MemoryAnnouncer {
    async fn announce(&self, line: &str) -> Result<()> {
        self.buffer().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_announcer_collects_lines_in_order() {
        let announcer = MemoryAnnouncer::new();
        announcer.announce("first").await.unwrap();
        announcer.announce("second").await.unwrap();

        assert_eq!(announcer.lines(), vec!["first", "second"]);
        assert_eq!(announcer.transcript(), "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_memory_announcer_shared_buffer() {
        let buffer = Arc::new(Mutex::new(vec!["preexisting".to_string()]));
        let announcer = MemoryAnnouncer::with_buffer(buffer.clone());
        announcer.announce("appended").await.unwrap();

        assert_eq!(buffer.lock().unwrap().len(), 2);
        assert_eq!(announcer.lines()[1], "appended");
    }

    #[tokio::test]
    async fn test_memory_announcer_keeps_lines_after_poisoned_lock() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let announcer = MemoryAnnouncer::with_buffer(buffer.clone());
        announcer.announce("before").await.unwrap();

        let holder = buffer.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.lock().unwrap();
            panic!("writer crashed while holding the transcript");
        })
        .join();
        assert!(buffer.is_poisoned());

        announcer.announce("after").await.unwrap();

        assert_eq!(announcer.lines(), vec!["before", "after"]);
        assert_eq!(announcer.transcript(), "before\nafter\n");
    }
}
