//! 発行済みクエリの追跡
//!
//! 応答は発行順とは限らない順序で返ってくるため、最後に発行した
//! チケットの応答だけを採用する。

use std::sync::atomic::{AtomicU64, Ordering};

/// クエリ発行ごとに採番されるチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// 最新チケットの管理
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: AtomicU64,
    current: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいチケットを発行し、それを最新とする
    pub fn issue(&self) -> QueryTicket {
        let id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.current.store(id, Ordering::SeqCst);
        QueryTicket(id)
    }

    /// 最新のチケットか
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// 発行済みのチケットを全て無効にする
    ///
    /// サジェスト選択で画面遷移する場合など、実行中の応答を捨てたいときに使う。
    pub fn invalidate(&self) {
        self.current.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_invalidate_discards_all() {
        let tracker = RequestTracker::new();
        let ticket = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_current(ticket));

        let next = tracker.issue();
        assert!(tracker.is_current(next));
        assert_ne!(next, ticket);
    }
}
