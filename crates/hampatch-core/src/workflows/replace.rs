use crate::core::io::table::{TableError, TextTableFile};
use crate::core::io::traits::MatrixFile;
use crate::core::models::hamiltonian::Hamiltonian;
use crate::core::models::replacement::ReplacementBlock;
use crate::core::tiling::TilingPattern;
use crate::engine::config::PatchConfig;
use crate::engine::error::PatchError;
use crate::engine::patcher::{PatchReport, apply_tiling};
use nalgebra::DMatrix;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace, warn};

const SYMMETRY_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct ReplaceResult {
    pub output_path: PathBuf,
    pub matrix: DMatrix<f64>,
    pub report: PatchReport,
}

/// Reads `source_path` and `replacement_path`, patches the source matrix and
/// writes it to the path derived by [`crate::engine::config::OutputConfig::output_path_for`].
///
/// Every input check happens before the output file is created; on error no
/// file is written.
#[instrument(skip_all, name = "replace_workflow")]
pub fn run(
    source_path: &Path,
    replacement_path: &Path,
    config: &PatchConfig,
) -> Result<ReplaceResult, PatchError> {
    info!("Loading source matrix from {:?}", source_path);
    let hamiltonian = Hamiltonian::new(load_table(source_path)?)?;
    debug!(
        "Source matrix is {}x{}.",
        hamiltonian.dimension(),
        hamiltonian.dimension()
    );
    trace!("Source matrix:{}", hamiltonian.matrix());
    if !hamiltonian.is_symmetric(SYMMETRY_TOLERANCE) {
        warn!("Source matrix is not symmetric; only the tiled entries will be made symmetric.");
    }

    info!("Loading replacement matrix from {:?}", replacement_path);
    let replacement = ReplacementBlock::from_table(&load_table(replacement_path)?)?;
    trace!("Replacement block:{}", replacement.values());

    let result = apply_tiling(&hamiltonian, &replacement, &TilingPattern::default())?;
    trace!("Patched matrix:{}", result.matrix);

    let output_path = config.output.output_path_for(source_path);
    info!("Writing patched matrix to {:?}", output_path);
    TextTableFile::write_to_path(&result.matrix, &config.output.format, &output_path).map_err(
        |source| PatchError::Output {
            path: output_path.clone(),
            source,
        },
    )?;

    Ok(ReplaceResult {
        output_path,
        matrix: result.matrix,
        report: result.report,
    })
}

fn load_table(path: &Path) -> Result<DMatrix<f64>, PatchError> {
    let file = File::open(path).map_err(|source| PatchError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    TextTableFile::read_from(&mut reader).map_err(|e| match e {
        TableError::Io(source) => PatchError::InputNotFound {
            path: path.to_path_buf(),
            source,
        },
        source => PatchError::MalformedTable {
            path: path.to_path_buf(),
            source,
        },
    })
}
