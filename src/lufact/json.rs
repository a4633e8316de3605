use super::LuFactors;
use crate::algebra::*;

use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::{fs::File, io, io::Read};

impl<T> LuFactors<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    /// Writes the factorization to a file in JSON format.
    pub fn save_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Reads a factorization previously written by
    /// [`save_to_file`](LuFactors::save_to_file).
    ///
    /// The factor structure is checked after loading, and malformed data
    /// is reported as [`io::ErrorKind::InvalidData`].
    pub fn load_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let factors: LuFactors<T> = serde_json::from_str(&buffer)?;

        factors
            .check_format()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(factors)
    }
}

#[test]
fn test_json_io() {
    use std::io::{Seek, SeekFrom};

    let factors = LuFactors::new(
        2,
        vec![4.0, 0.5, 5.0, -1.5],
        vec![0, 1, 0, 1],
        vec![1, 4],
        vec![0, 2, 4],
        vec![1, 0],
        vec![0, 1],
    );

    let mut file = tempfile::tempfile().unwrap();
    factors.save_to_file(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    let loaded = LuFactors::<f64>::load_from_file(&mut file).unwrap();
    assert_eq!(factors, loaded);
}
