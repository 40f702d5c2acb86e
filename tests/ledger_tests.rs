use std::fs;
use tempfile::tempdir;
use timeledger::core::ledger::Ledger;
use timeledger::errors::AppError;
use timeledger::models::LedgerRow;

mod common;
use common::{HEADER, Script, read, write_ledger};

fn sample_row(n: &str) -> LedgerRow {
    LedgerRow {
        n: n.to_string(),
        tempo_total: "1h".to_string(),
        atividade: "Revisão de código".to_string(),
        data_inicio: "2025-03-10 09:00:00".to_string(),
        data_fim: "2025-03-10 10:00:00".to_string(),
        valor_hora: "100.00".to_string(),
        valor: "100.00".to_string(),
        pago: "Não".to_string(),
    }
}

#[test]
fn test_next_id_missing_and_empty_ledger() {
    let dir = tempdir().unwrap();

    let missing = Ledger::new(dir.path().join("missing.csv"));
    assert_eq!(missing.next_id().unwrap(), 1);

    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "").unwrap();
    assert_eq!(Ledger::new(&empty).next_id().unwrap(), 1);

    let header_only = write_ledger(dir.path(), "header.csv", &[HEADER]);
    assert_eq!(Ledger::new(header_only).next_id().unwrap(), 1);
}

#[test]
fn test_next_id_is_max_plus_one() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            HEADER,
            "3,1h,b,2025-01-01 09:00:00,2025-01-01 10:00:00,100.00,100.00,Não",
            "1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,100.00,100.00,Não",
            "x,1h,broken id,,,100.00,100.00,Não",
        ],
    );
    assert_eq!(Ledger::new(path).next_id().unwrap(), 4);
}

#[test]
fn test_next_id_ignores_id_that_cannot_grow() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            HEADER,
            "3,1h,a,,,100.00,100.00,Não",
            "18446744073709551615,1h,b,,,100.00,100.00,Não",
        ],
    );
    assert_eq!(Ledger::new(&path).next_id().unwrap(), 4);

    let only_max = write_ledger(
        dir.path(),
        "max.csv",
        &[HEADER, "18446744073709551615,1h,b,,,100.00,100.00,Não"],
    );
    assert_eq!(Ledger::new(only_max).next_id().unwrap(), 1);
}

#[test]
fn test_append_creates_file_with_header() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("novo.csv"));

    ledger.append(&sample_row("1")).unwrap();

    assert_eq!(
        read(ledger.path()),
        format!(
            "{HEADER}\r\n1,1h,Revisão de código,2025-03-10 09:00:00,2025-03-10 10:00:00,100.00,100.00,Não\r\n"
        )
    );
}

#[test]
fn test_append_keeps_existing_rows() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[HEADER, "1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,100.00,100.00,Sim"],
    );
    let ledger = Ledger::new(&path);

    ledger.append(&sample_row("2")).unwrap();

    let rows = ledger.rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].pago, "Sim");
    assert_eq!(rows[1].n, "2");
    assert_eq!(read(&path).matches(HEADER).count(), 1);
}

#[test]
fn test_append_after_missing_final_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p.csv");
    fs::write(
        &path,
        format!("{HEADER}\r\n1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,100.00,100.00,Não"),
    )
    .unwrap();
    let ledger = Ledger::new(&path);

    ledger.append(&sample_row("2")).unwrap();

    let ids: Vec<String> = ledger.rows().unwrap().into_iter().map(|r| r.n).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_append_quotes_activity_with_commas() {
    let dir = tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("p.csv"));
    let mut row = sample_row("1");
    row.atividade = "Reunião, ajustes \"finais\"".to_string();

    ledger.append(&row).unwrap();

    assert_eq!(ledger.rows().unwrap()[0].atividade, "Reunião, ajustes \"finais\"");
}

#[test]
fn test_sync_migrates_old_layout_and_backfills() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "old.csv",
        &[
            "n,tempo_total,atividade,data_inicio,data_fim,valor,pago",
            "1,1h30m,\"Setup, deploy\",2024-12-01 08:00:00,2024-12-01 09:30:00,150.00,Sim",
            "2,45m,Suporte,2024-12-02 10:00:00,2024-12-02 10:45:00,75.00,Não",
        ],
    );
    let ledger = Ledger::new(&path);

    assert!(ledger.synchronize_schema(Some(100.0)).unwrap());

    assert_eq!(
        read(&path),
        format!(
            "{HEADER}\r\n\
             1,1h30m,\"Setup, deploy\",2024-12-01 08:00:00,2024-12-01 09:30:00,100.00,150.00,Sim\r\n\
             2,45m,Suporte,2024-12-02 10:00:00,2024-12-02 10:45:00,100.00,75.00,Não\r\n"
        )
    );
}

#[test]
fn test_sync_backfills_only_blank_rates() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            HEADER,
            "1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,150.00,150.00,Não",
            "2,1h,b,2025-01-02 08:00:00,2025-01-02 09:00:00,,100.00,Não",
        ],
    );
    let ledger = Ledger::new(&path);

    assert!(ledger.synchronize_schema(Some(100.0)).unwrap());

    let rows = ledger.rows().unwrap();
    assert_eq!(rows[0].valor_hora, "150.00");
    assert_eq!(rows[1].valor_hora, "100.00");
    assert_eq!(rows[1].atividade, "b");
}

#[test]
fn test_sync_is_noop_when_nothing_to_do() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[HEADER, "1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,,100.00,Não"],
    );
    let before = fs::read(&path).unwrap();
    let ledger = Ledger::new(&path);

    // blank rate but no default: layout already canonical
    assert!(!ledger.synchronize_schema(None).unwrap());
    assert_eq!(fs::read(&path).unwrap(), before);

    let missing = Ledger::new(dir.path().join("missing.csv"));
    assert!(!missing.synchronize_schema(Some(100.0)).unwrap());
    assert!(!missing.path().exists());
}

/// Old-layout ledger with two rows saved as Latin-1 (`Não`, `café`).
fn write_latin1_ledger(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("latin1.csv");
    let mut bytes = b"n,tempo_total,atividade,data_inicio,data_fim,valor,pago\r\n".to_vec();
    bytes.extend_from_slice(b"1,1h,a,,,10.00,N\xe3o\r\n");
    bytes.extend_from_slice(b"2,1h,caf\xe9,,,10.00,Sim\r\n");
    bytes.extend_from_slice(b"3,1h,c,,,10.00,Sim\r\n");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_sync_refuses_to_drop_unreadable_records() {
    let dir = tempdir().unwrap();
    let path = write_latin1_ledger(dir.path());
    let before = fs::read(&path).unwrap();
    let ledger = Ledger::new(&path);

    let err = ledger.synchronize_schema(Some(100.0)).unwrap_err();

    assert!(matches!(err, AppError::UnreadableLedger { count: 2, .. }));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_resolve_hourly_rate_keeps_unreadable_ledger_intact() {
    let dir = tempdir().unwrap();
    let path = write_latin1_ledger(dir.path());
    let before = fs::read(&path).unwrap();
    let mut script = Script::new(&["100"]);

    let result = Ledger::new(&path).resolve_hourly_rate(&mut script, 113.63);

    assert!(matches!(result, Err(AppError::UnreadableLedger { .. })));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_sync_reorders_columns_and_drops_unknown() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            "pago,n,extra,atividade,tempo_total,valor,valor_hora,data_inicio,data_fim",
            "Não,7,zzz,Design,2h,240.00,120.00,2025-02-01 08:00:00,2025-02-01 10:00:00",
        ],
    );
    let ledger = Ledger::new(&path);

    assert!(ledger.synchronize_schema(None).unwrap());

    assert_eq!(
        read(&path),
        format!("{HEADER}\r\n7,2h,Design,2025-02-01 08:00:00,2025-02-01 10:00:00,120.00,240.00,Não\r\n")
    );
}

#[test]
fn test_read_hourly_rate() {
    let dir = tempdir().unwrap();

    assert_eq!(Ledger::new(dir.path().join("missing.csv")).read_hourly_rate().unwrap(), None);

    let no_column = write_ledger(
        dir.path(),
        "old.csv",
        &["n,tempo_total,atividade,valor,pago", "1,1h,a,100.00,Não"],
    );
    assert_eq!(Ledger::new(no_column).read_hourly_rate().unwrap(), None);

    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            HEADER,
            "1,1h,a,,,,100.00,Não",
            "2,1h,b,,,abc,100.00,Não",
            "3,1h,c,,,\"95,50\",95.50,Não",
            "4,1h,d,,,80.00,80.00,Não",
        ],
    );
    assert_eq!(Ledger::new(path).read_hourly_rate().unwrap(), Some(95.5));
}

#[test]
fn test_resolve_hourly_rate_uses_recorded_value_without_asking() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "p.csv",
        &[
            HEADER,
            "1,1h,a,,,90.00,90.00,Não",
            "2,1h,b,,,,90.00,Não",
        ],
    );
    let ledger = Ledger::new(&path);
    let mut script = Script::new(&[]);

    let rate = ledger.resolve_hourly_rate(&mut script, 113.63).unwrap();

    assert_eq!(rate, 90.0);
    assert!(script.asked.is_empty());
    assert_eq!(ledger.rows().unwrap()[1].valor_hora, "90.00");
}

#[test]
fn test_resolve_hourly_rate_prompts_until_valid_and_persists() {
    let dir = tempdir().unwrap();
    let path = write_ledger(
        dir.path(),
        "old.csv",
        &[
            "n,tempo_total,atividade,data_inicio,data_fim,valor,pago",
            "1,1h,a,2025-01-01 08:00:00,2025-01-01 09:00:00,100.00,Não",
        ],
    );
    let ledger = Ledger::new(&path);
    let mut script = Script::new(&["0", "abc", "-3", "120,456"]);

    let rate = ledger.resolve_hourly_rate(&mut script, 113.63).unwrap();

    assert_eq!(rate, 120.46);
    assert_eq!(script.asked.len(), 4);
    assert_eq!(script.asked[0], "Valor-hora (R$) [113.63]: ");
    assert_eq!(ledger.headers().unwrap(), HEADER.split(',').collect::<Vec<_>>());
    assert_eq!(ledger.rows().unwrap()[0].valor_hora, "120.46");
}

#[test]
fn test_resolve_hourly_rate_empty_answer_takes_suggestion() {
    let dir = tempdir().unwrap();
    let path = write_ledger(dir.path(), "p.csv", &[HEADER]);
    let mut script = Script::new(&[""]);

    let rate = Ledger::new(path).resolve_hourly_rate(&mut script, 113.63).unwrap();

    assert_eq!(rate, 113.63);
}
