use std::{io, path::Path};
use tokio::fs;

use models::housing_location::HousingLocation;

use crate::errors::ServiceError;

/// Read a JSON seed file holding an array of housing locations.
///
/// The file is read exactly once at startup and this module never writes.
/// `Ok(None)` means the file does not exist, letting callers fall back to
/// the builtin records; any other read failure is a seed error.
pub async fn read_seed_records(
    path: impl AsRef<Path>,
) -> Result<Option<Vec<HousingLocation>>, ServiceError> {
    let path = path.as_ref();
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ServiceError::Seed(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };
    let records = HousingLocation::from_json_slice(&bytes)?;
    Ok(Some(records))
}
