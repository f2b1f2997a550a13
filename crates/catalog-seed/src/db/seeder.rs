//! Conflict-skip seeding of the course catalog.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{Connection, PgConnection, Postgres};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::{Catalog, Course, Package};
use crate::config::{ConfigError, SeedConfig};
use crate::report::{BatchReport, InsertOutcome, SeedSummary};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),
    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// Loads a [`Catalog`] into the `courses`, `packages` and `package_courses`
/// tables inside one transaction on a single connection.
pub struct Seeder {
    conn: PgConnection,
}

impl Seeder {
    /// Creates a new seeder over an open connection.
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Opens the one connection described by `config`. A refused or
    /// unreachable server fails immediately with the driver's error.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let conn = PgConnection::connect_with(&config.connect_options()?).await?;
        Ok(Self::new(conn))
    }

    /// Inserts courses, then packages, then links, commits once and reads
    /// back the active totals.
    pub async fn seed(&mut self, catalog: &Catalog<'_>) -> Result<SeedSummary, SeedError> {
        let mut tx = self.conn.begin().await?;

        let courses = Self::seed_courses(&mut *tx, catalog.courses).await?;
        let packages = Self::seed_packages(&mut *tx, catalog.packages).await?;
        let links = Self::seed_links(&mut *tx, catalog).await?;

        tx.commit().await?;

        let (total_courses, total_packages) = self.count_active().await?;

        Ok(SeedSummary {
            total_courses,
            total_packages,
            courses,
            packages,
            links,
        })
    }

    /// Seeds courses. Existing codes are skipped; other failures are logged
    /// and the batch continues.
    pub async fn seed_courses(
        conn: &mut PgConnection,
        courses: &[Course],
    ) -> Result<BatchReport, SeedError> {
        info!("Inserting {} courses...", courses.len());
        let mut report = BatchReport::default();

        for course in courses {
            let query = sqlx::query(
                r#"
                INSERT INTO courses (id, name, code, description, duration, fee, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (code) DO NOTHING
                "#,
            )
            .bind(course.id)
            .bind(course.name)
            .bind(course.code)
            .bind(course.description)
            .bind(course.duration)
            .bind(course.fee)
            .bind(course.is_active);

            let outcome = execute_isolated(conn, query).await?;
            log_outcome(course.name, &outcome);
            report.record(&outcome);
        }

        Ok(report)
    }

    /// Seeds packages. Same conflict and failure handling as courses.
    pub async fn seed_packages(
        conn: &mut PgConnection,
        packages: &[Package],
    ) -> Result<BatchReport, SeedError> {
        info!("Inserting {} packages...", packages.len());
        let mut report = BatchReport::default();

        for package in packages {
            let query = sqlx::query(
                r#"
                INSERT INTO packages (id, name, code, description, duration, price, discount_percentage, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (code) DO NOTHING
                "#,
            )
            .bind(package.id)
            .bind(package.name)
            .bind(package.code)
            .bind(package.description)
            .bind(package.duration)
            .bind(package.price)
            .bind(package.discount_percentage)
            .bind(package.is_active);

            let outcome = execute_isolated(conn, query).await?;
            log_outcome(package.name, &outcome);
            report.record(&outcome);
        }

        Ok(report)
    }

    /// Seeds package-course links. Must run after both referenced batches.
    pub async fn seed_links(
        conn: &mut PgConnection,
        catalog: &Catalog<'_>,
    ) -> Result<BatchReport, SeedError> {
        info!("Linking packages to courses...");
        let mut report = BatchReport::default();

        for link in catalog.links {
            let query = sqlx::query(
                r#"
                INSERT INTO package_courses (package_id, course_id)
                VALUES ($1, $2)
                ON CONFLICT (package_id, course_id) DO NOTHING
                "#,
            )
            .bind(link.package_id)
            .bind(link.course_id);

            let outcome = execute_isolated(conn, query).await?;
            let package = catalog.package_name(link.package_id).unwrap_or("<unknown package>");
            let course = catalog.course_name(link.course_id).unwrap_or("<unknown course>");
            match &outcome {
                InsertOutcome::Inserted => debug!("  Linked: {} -> {}", package, course),
                InsertOutcome::Skipped => debug!("  Skipped (exists): {} -> {}", package, course),
                InsertOutcome::Failed(e) => {
                    error!("  Error inserting mapping {} -> {}: {}", package, course, e)
                }
            }
            report.record(&outcome);
        }

        info!("  Created {} package-course links", report.inserted);
        Ok(report)
    }

    /// Counts courses and packages that are not soft-deleted.
    pub async fn count_active(&mut self) -> Result<(i64, i64), SeedError> {
        let courses: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE deleted_at IS NULL")
                .fetch_one(&mut self.conn)
                .await?;
        let packages: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM packages WHERE deleted_at IS NULL")
                .fetch_one(&mut self.conn)
                .await?;

        Ok((courses, packages))
    }

    /// Sends a graceful shutdown to the server and drops the connection.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.close().await?;
        Ok(())
    }

    /// Returns the underlying connection for advanced usage.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

/// Runs one insert under a savepoint so a failing statement does not poison
/// the enclosing transaction. Statement errors become
/// [`InsertOutcome::Failed`]; errors managing the savepoint itself are
/// returned, since they mean the connection is unusable.
async fn execute_isolated(
    conn: &mut PgConnection,
    query: Query<'_, Postgres, PgArguments>,
) -> Result<InsertOutcome, SeedError> {
    let mut savepoint = conn.begin().await?;

    match query.execute(&mut *savepoint).await {
        Ok(result) => {
            savepoint.commit().await?;
            Ok(InsertOutcome::from_rows_affected(result.rows_affected()))
        }
        Err(e) => {
            savepoint.rollback().await?;
            Ok(InsertOutcome::Failed(e))
        }
    }
}

fn log_outcome(name: &str, outcome: &InsertOutcome) {
    match outcome {
        InsertOutcome::Inserted => info!("  Inserted: {}", name),
        InsertOutcome::Skipped => info!("  Skipped (exists): {}", name),
        InsertOutcome::Failed(e) => error!("  Error inserting {}: {}", name, e),
    }
}
