//! One project's CSV ledger: reading, schema migration and appends.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{FIELDNAMES, LedgerRow};
use crate::ui::messages::info;
use crate::ui::prompt::{self, Prompt};
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user, e.g. `cliente_x.csv`.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn reader(&self) -> AppResult<Option<csv::Reader<File>>> {
        if !self.exists() {
            return Ok(None);
        }
        let rdr = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        Ok(Some(rdr))
    }

    /// Header row as found in the file (empty for a missing or blank file).
    pub fn headers(&self) -> AppResult<Vec<String>> {
        match self.reader()? {
            Some(mut rdr) => Ok(rdr.headers()?.iter().map(str::to_string).collect()),
            None => Ok(Vec::new()),
        }
    }

    /// All decodable rows, top to bottom. Broken records are logged and skipped.
    pub fn rows(&self) -> AppResult<Vec<LedgerRow>> {
        Ok(self.read_rows()?.0)
    }

    /// Decodable rows plus the number of records that had to be skipped.
    fn read_rows(&self) -> AppResult<(Vec<LedgerRow>, usize)> {
        let Some(mut rdr) = self.reader()? else {
            return Ok((Vec::new(), 0));
        };

        let mut rows = Vec::new();
        let mut skipped = 0;
        for (idx, result) in rdr.deserialize::<LedgerRow>().enumerate() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        ledger = %self.path.display(),
                        record = idx + 1,
                        "skipping unreadable record: {e}"
                    );
                }
            }
        }
        Ok((rows, skipped))
    }

    /// First usable `valor_hora` scanning rows top to bottom.
    pub fn read_hourly_rate(&self) -> AppResult<Option<f64>> {
        if !self.headers()?.iter().any(|h| h == "valor_hora") {
            return Ok(None);
        }
        Ok(self.rows()?.iter().find_map(LedgerRow::hourly_rate))
    }

    /// Hourly rate of this project, asking the operator when none is recorded.
    ///
    /// The file is synchronized with the resulting rate either way, so older
    /// rows without `valor_hora` get it backfilled.
    pub fn resolve_hourly_rate(&self, prompt: &mut dyn Prompt, suggested: f64) -> AppResult<f64> {
        if let Some(rate) = self.read_hourly_rate()? {
            self.synchronize_schema(Some(rate))?;
            return Ok(rate);
        }

        info(
            "Este projeto ainda não possui um valor-hora definido. \
             Informe o valor que será usado para todos os lançamentos.",
        );
        let rate = prompt::ask_hourly_rate(prompt, Some(suggested))?;
        self.synchronize_schema(Some(rate))?;
        Ok(rate)
    }

    /// Bring the file to the canonical column layout.
    ///
    /// Rewrites when the header differs from `FIELDNAMES`, or when some row
    /// has a blank `valor_hora` and `default_rate` is given (those rows get the
    /// default). Returns whether the file was rewritten.
    ///
    /// A rewrite over records that cannot be decoded would lose them, so it
    /// fails with `UnreadableLedger` and leaves the file as it is.
    pub fn synchronize_schema(&self, default_rate: Option<f64>) -> AppResult<bool> {
        if !self.exists() {
            return Ok(false);
        }

        let headers = self.headers()?;
        let (rows, skipped) = self.read_rows()?;

        let needs_layout = headers != FIELDNAMES;
        let needs_backfill = rows.iter().any(|r| !r.has_hourly_rate());

        if !needs_layout && !(needs_backfill && default_rate.is_some()) {
            return Ok(false);
        }

        if skipped > 0 {
            return Err(AppError::UnreadableLedger {
                path: self.path.display().to_string(),
                count: skipped,
            });
        }

        let migrated: Vec<LedgerRow> = rows
            .into_iter()
            .map(|mut row| {
                let current = row.valor_hora.trim().to_string();
                row.valor_hora = match default_rate {
                    Some(rate) if current.is_empty() => format!("{rate:.2}"),
                    _ => current,
                };
                row
            })
            .collect();

        debug!(
            ledger = %self.path.display(),
            rows = migrated.len(),
            needs_layout,
            needs_backfill,
            "rewriting ledger"
        );
        self.rewrite(&migrated)?;
        Ok(true)
    }

    /// `max(n) + 1`, ignoring rows whose id does not parse or is already `u64::MAX`.
    pub fn next_id(&self) -> AppResult<u64> {
        Ok(self
            .rows()?
            .iter()
            .filter_map(LedgerRow::id)
            .filter_map(|id| id.checked_add(1))
            .max()
            .unwrap_or(1))
    }

    /// Append one row, writing the header first when the file is new.
    pub fn append(&self, row: &LedgerRow) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let is_new = !self.exists() || fs::metadata(&self.path)?.len() == 0;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        if !is_new && !ends_with_newline(&mut file)? {
            file.write_all(b"\r\n")?;
        }

        let mut wtr = csv_writer(file);
        if is_new {
            wtr.write_record(FIELDNAMES)?;
        }
        wtr.write_record(row.to_record())?;
        wtr.flush()?;

        debug!(ledger = %self.path.display(), n = %row.n, "row appended");
        Ok(())
    }

    /// Create (or truncate) the ledger with just the header row.
    pub fn create(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        self.rewrite(&[])
    }

    /// Replace the whole file through a temp file in the same directory,
    /// so an interrupted write never leaves a truncated ledger behind.
    fn rewrite(&self, rows: &[LedgerRow]) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir)?;
        let mut wtr = csv_writer(tmp);
        wtr.write_record(FIELDNAMES)?;
        for row in rows {
            wtr.write_record(row.to_record())?;
        }

        let tmp = wtr
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(inner)
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
