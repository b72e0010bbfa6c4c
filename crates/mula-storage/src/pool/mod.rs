//! Connection pool managing the write connection and read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mula_core::errors::MulaResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Manages the single write connection and, for file-backed databases, the read pool.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    /// `None` for in-memory databases; a second in-memory connection would be a separate database.
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a connection pool for the given database file.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> MulaResult<Self> {
        // Writer first: it creates the file and the WAL the readers attach to.
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self {
            writer: Arc::new(writer),
            readers: Some(Arc::new(readers)),
            db_path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool (for testing). All traffic goes through the writer.
    pub fn open_in_memory() -> MulaResult<Self> {
        Ok(Self {
            writer: Arc::new(WriteConnection::open_in_memory()?),
            readers: None,
            db_path: None,
        })
    }
}
