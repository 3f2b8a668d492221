use crate::{CoreError, CoreResult};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Move `from` to `to`, deleting any file already at `to`.
///
/// Falls back to copy-and-delete when a rename is impossible, e.g. when the
/// artifact lives on another volume.
#[instrument]
pub(crate) async fn replace_file(from: &Path, to: &Path) -> CoreResult<()> {
    let exists = tokio::fs::try_exists(to)
        .await
        .map_err(|e| replacement_error(from, to, e))?;

    if exists {
        tokio::fs::remove_file(to)
            .await
            .map_err(|e| replacement_error(from, to, e))?;
        debug!(path = ?to, "Removed previous file");
    }

    if let Err(rename_error) = tokio::fs::rename(from, to).await {
        debug!(error = %rename_error, "Rename failed, copying instead");

        tokio::fs::copy(from, to)
            .await
            .map_err(|e| replacement_error(from, to, e))?;
        tokio::fs::remove_file(from)
            .await
            .map_err(|e| replacement_error(from, to, e))?;
    }

    info!(from = ?from, to = ?to, "Video saved");

    Ok(())
}

#[track_caller]
fn replacement_error(from: &Path, to: &Path, source: std::io::Error) -> CoreError {
    CoreError::FileReplacement {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
