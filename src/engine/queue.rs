// WorkQueue - ワーカー間で共有する作業キュー

use crate::core::UploadItem;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// 全ワーカーが共有するFIFOキュー
///
/// `claim` はロックを取って先頭を取り出すだけで、`.await` を挟まない。
/// 同じアイテムが2つのワーカーに渡ることはない。
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: Mutex<VecDeque<UploadItem>>,
}

impl WorkQueue {
    pub fn new(items: Vec<UploadItem>) -> Self {
        Self {
            items: Mutex::new(items.into()),
        }
    }

    /// 次のアイテムを取り出す。空なら `None`
    pub fn claim(&self) -> Option<UploadItem> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // ワーカーがパニックしてもキュー自体は整合しているのでそのまま使う
    fn lock(&self) -> MutexGuard<'_, VecDeque<UploadItem>> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
