// テストユーティリティとモック実装
// 統合テスト用のアップローダー・レポーターとテストデータ生成

#![allow(dead_code)]

pub mod test_data;

pub use mocks::*;
pub use test_data::*;
