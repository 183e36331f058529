//! Canned datasets and files.

use super::builders::DatasetBuilder;
use pnsearch::Dataset;
use std::io::Write;
use std::path::PathBuf;

/// Column names of [`orders`], in load order.
pub const ORDER_COLUMNS: [&str; 17] = [
    "登録日",
    "製番",
    "ユニットNo",
    "品番",
    "品名",
    "形式寸法",
    "メーカ",
    "仕入先略称",
    "材質",
    "必要数",
    "部品発注数",
    "発注単価",
    "発注金額",
    "工程名",
    "納入場所名",
    "発注日",
    "納入日",
];

/// Five order lines, newest registration first.
///
/// | row | 品名 | 発注日 | 納入日 |
/// |-----|------|--------|--------|
/// | 0 | 六角ボルト | set | - |
/// | 1 | 六角ナット | set | set |
/// | 2 | スプリング | - | - |
/// | 3 | 六角ボルト | set | set |
/// | 4 | ベアリング | set | set |
pub fn orders() -> Dataset {
    DatasetBuilder::new()
        .filled("登録日", &["2024-05-10", "2024-05-08", "2024-04-30", "2024-04-02", "2024-03-15"])
        .filled("製番", &["P100", "P100", "P200", "P200", "P300"])
        .filled("ユニットNo", &["U-01", "U-02", "U-11", "U-12", "U-21"])
        .filled("品番", &["B-6-20", "N-6", "SP-10", "B-8-30", "BRG-6200"])
        .filled("品名", &["六角ボルト", "六角ナット", "スプリング", "六角ボルト", "ベアリング"])
        .filled("形式寸法", &["M6x20", "M6", "φ10 L30", "M8x30", "6200ZZ"])
        .filled("メーカ", &["ミスミ", "ミスミ", "サンコー", "サンコー", "NSK"])
        .filled("仕入先略称", &["山田商事", "山田商事", "佐藤機工", "佐藤機工", "鈴木商会"])
        .filled("材質", &["ライン1", "ライン1", "ライン2", "ライン2", "ライン3"])
        .filled("必要数", &["10", "20", "4", "8", "2"])
        .filled("部品発注数", &["10", "20", "4", "10", "2"])
        .filled("発注単価", &["12", "5", "80", "15", "450"])
        .filled("発注金額", &["120", "100", "320", "150", "900"])
        .filled("工程名", &["組立", "組立", "加工", "加工", "組立"])
        .filled("納入場所名", &["第1工場", "第1工場", "第2工場", "第2工場", "第1工場"])
        .column(
            "発注日",
            &[Some("2024-05-11"), Some("2024-05-09"), None, Some("2024-04-03"), Some("2024-03-16")],
        )
        .column(
            "納入日",
            &[None, Some("2024-05-15"), None, Some("2024-04-10"), Some("2024-03-30")],
        )
        .build()
}

/// The three-row table used by the scenario tests.
pub fn alpha_beta() -> Dataset {
    DatasetBuilder::new()
        .filled("登録日", &["3", "2", "1"])
        .filled("品名", &["Alpha", "beta", "ALPHA-2"])
        .column("発注日", &[None, Some("2024-01-01"), None])
        .filled("title", &["t1", "t2", "t3"])
        .build()
}

/// `orders()` written as CSV into a temp dir. Keep the dir alive while the
/// path is in use.
pub fn orders_csv() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "登録日,品名,形式寸法,発注日").unwrap();
    writeln!(file, "2024-05-10,六角ボルト,M6x20,2024-05-11").unwrap();
    writeln!(file, "2024-05-08,六角ナット,M6,").unwrap();
    writeln!(file, "2024-04-30,スプリング,\"φ10, L30\",").unwrap();
    (dir, path)
}

/// A SQLite file with an `order2` table mixing text and numeric columns.
pub fn orders_sqlite() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE order2 (登録日 TEXT, 品名 TEXT, 形式寸法 TEXT, 数量 INTEGER, 発注日 TEXT);
         INSERT INTO order2 VALUES ('2024-05-10', '六角ボルト', 'M6x20', 10, '2024-05-11');
         INSERT INTO order2 VALUES ('2024-05-08', '六角ナット', 'M6', 20, NULL);
         INSERT INTO order2 VALUES ('2024-04-30', 'スプリング', NULL, 4, NULL);",
    )
    .unwrap();
    (dir, path)
}
