use pool_core::{Golfer, GolferId, NewGolfer};
use pool_server_app::domain::{RepoError, RepoRetrieveError, roster::RosterRepository};
use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

pub struct SqliteRosterRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRosterRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn golfer_from_row(row: &SqliteRow) -> Result<Golfer, RepoError> {
        let id: i64 = row.try_get("id").map_err(storage_error)?;
        let name: String = row.try_get("name").map_err(storage_error)?;
        let salary: i64 = row.try_get("salary").map_err(storage_error)?;
        let salary = u32::try_from(salary).map_err(|_| {
            RepoError::StorageError(format!("golfer {} has invalid salary {}", id, salary))
        })?;
        Ok(Golfer::new(GolferId(id), name, salary))
    }
}

fn storage_error(e: sqlx::Error) -> RepoError {
    RepoError::StorageError(e.to_string())
}

#[async_trait::async_trait]
impl RosterRepository for SqliteRosterRepository {
    async fn list_golfers(&self) -> Result<Vec<Golfer>, RepoError> {
        let rows = sqlx::query("SELECT id, name, salary FROM golfers ORDER BY name, id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        rows.iter().map(Self::golfer_from_row).collect()
    }

    async fn add_golfer(&self, golfer: NewGolfer) -> Result<Golfer, RepoError> {
        let res = sqlx::query("INSERT INTO golfers (name, salary) VALUES (?, ?)")
            .bind(&golfer.name)
            .bind(i64::from(golfer.salary))
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(Golfer::new(
            GolferId(res.last_insert_rowid()),
            golfer.name,
            golfer.salary,
        ))
    }

    async fn add_golfers(&self, golfers: Vec<NewGolfer>) -> Result<Vec<Golfer>, RepoError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;
        let mut inserted = Vec::with_capacity(golfers.len());
        for golfer in golfers {
            let res = sqlx::query("INSERT INTO golfers (name, salary) VALUES (?, ?)")
                .bind(&golfer.name)
                .bind(i64::from(golfer.salary))
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
            inserted.push(Golfer::new(
                GolferId(res.last_insert_rowid()),
                golfer.name,
                golfer.salary,
            ));
        }
        tx.commit().await.map_err(storage_error)?;
        Ok(inserted)
    }

    async fn remove_golfer(&self, id: GolferId) -> Result<(), RepoRetrieveError> {
        let res = sqlx::query("DELETE FROM golfers WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?;
        if res.rows_affected() == 0 {
            return Err(RepoRetrieveError::NotFound);
        }
        Ok(())
    }

    async fn clear_golfers(&self) -> Result<u64, RepoError> {
        let res = sqlx::query("DELETE FROM golfers")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(res.rows_affected())
    }
}
