use std::fs;
use std::path::Path;

pub const EXPECTED_FIELDS: usize = 14;

// File order of the numeric columns, after the leading neighborhood label.
const NUMERIC_COLUMNS: [&str; 13] = [
    "crim", "zn", "indus", "chas", "nox", "rooms", "age", "dis", "rad", "tax", "ptratio", "lstat",
    "mv",
];

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input file '{path}' is not valid UTF-8: {source}")]
    NotUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: expected {expected} fields, got {got}")]
    FieldCount { row: usize, expected: usize, got: usize },
    #[error("row {row}, column {column} ({name}): cannot parse '{value}' as a number")]
    InvalidNumber { row: usize, column: usize, name: &'static str, value: String },
}

/// One source row, parsed and validated as a whole. Only `crim`, `rooms`
/// and `mv` are carried into [`HousingData`]; the remaining columns are
/// validated and dropped.
#[derive(Debug, Clone)]
pub struct HousingRecord {
    pub neighborhood: String,
    pub crim: f64,
    pub zn: f64,
    pub indus: f64,
    pub chas: f64,
    pub nox: f64,
    pub rooms: f64,
    pub age: f64,
    pub dis: f64,
    pub rad: f64,
    pub tax: f64,
    pub ptratio: f64,
    pub lstat: f64,
    pub mv: f64,
}

fn numeric_field(row: usize, record: &csv::StringRecord, column: usize) -> Result<f64, LoadError> {
    let raw = &record[column];
    raw.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        name: NUMERIC_COLUMNS[column - 1],
        value: raw.to_string(),
    })
}

impl HousingRecord {
    pub fn parse(row: usize, record: &csv::StringRecord) -> Result<Self, LoadError> {
        if record.len() != EXPECTED_FIELDS {
            return Err(LoadError::FieldCount {
                row,
                expected: EXPECTED_FIELDS,
                got: record.len(),
            });
        }

        Ok(Self {
            neighborhood: record[0].to_string(),
            crim: numeric_field(row, record, 1)?,
            zn: numeric_field(row, record, 2)?,
            indus: numeric_field(row, record, 3)?,
            chas: numeric_field(row, record, 4)?,
            nox: numeric_field(row, record, 5)?,
            rooms: numeric_field(row, record, 6)?,
            age: numeric_field(row, record, 7)?,
            dis: numeric_field(row, record, 8)?,
            rad: numeric_field(row, record, 9)?,
            tax: numeric_field(row, record, 10)?,
            ptratio: numeric_field(row, record, 11)?,
            lstat: numeric_field(row, record, 12)?,
            mv: numeric_field(row, record, 13)?,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct HousingData {
    pub crim: Vec<f64>,
    pub rooms: Vec<f64>,
    pub mv: Vec<f64>,
}

impl HousingData {
    pub fn len(&self) -> usize {
        self.mv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mv.is_empty()
    }

    fn push(&mut self, rec: &HousingRecord) {
        self.crim.push(rec.crim);
        self.rooms.push(rec.rooms);
        self.mv.push(rec.mv);
    }
}

/// Parse housing CSV content: one header line, then rows of
/// [`EXPECTED_FIELDS`] fields each. Any malformed row fails the whole load.
pub fn parse_housing_csv(content: &str) -> Result<HousingData, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut data = HousingData::default();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // 1-based source row, counting the header line
        let rec = HousingRecord::parse(i + 2, &record)?;
        data.push(&rec);
    }
    Ok(data)
}

pub fn read_housing_csv<P: AsRef<Path>>(path: P) -> Result<HousingData, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|source| LoadError::Io { path: path.display().to_string(), source })?;
    let content = String::from_utf8(bytes)
        .map_err(|source| LoadError::NotUtf8 { path: path.display().to_string(), source })?;
    parse_housing_csv(&content)
}
