//! Repository for the `sessions` table.

use chrono::NaiveDate;
use marquee_core::listing::{SessionSort, ShowFilter};
use marquee_core::schedule::ShowWindow;
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{Session, SessionInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, hall_id, title, description, start_time, end_time, \
                       show_start_date, show_end_date, free_seats, ticket_price, \
                       created_at, updated_at";

/// Provides CRUD and listing operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session. `free_seats` starts at the hall's capacity,
    /// which the caller has already fetched.
    pub async fn create(
        pool: &PgPool,
        input: &SessionInput,
        free_seats: i32,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (hall_id, title, description, start_time, end_time,
                                   show_start_date, show_end_date, free_seats, ticket_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.hall_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.show_start_date)
            .bind(input.show_end_date)
            .bind(free_seats)
            .bind(input.ticket_price)
            .fetch_one(pool)
            .await
    }

    /// Find a session by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a session's schedule and pricing.
    ///
    /// Updates are only reachable for sessions without purchases, so
    /// `free_seats` is reset to the (possibly new) hall's capacity.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SessionInput,
        free_seats: i32,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                hall_id = $2,
                title = $3,
                description = $4,
                start_time = $5,
                end_time = $6,
                show_start_date = $7,
                show_end_date = $8,
                free_seats = $9,
                ticket_price = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(input.hall_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.show_start_date)
            .bind(input.show_end_date)
            .bind(free_seats)
            .bind(input.ticket_price)
            .fetch_optional(pool)
            .await
    }

    /// Show windows of every session in a hall, optionally excluding one
    /// session's own row (for update conflict checks).
    pub async fn windows_in_hall(
        pool: &PgPool,
        hall_id: DbId,
        exclude: Option<DbId>,
    ) -> Result<Vec<ShowWindow>, sqlx::Error> {
        let rows: Vec<(chrono::NaiveTime, chrono::NaiveTime, NaiveDate, NaiveDate)> =
            match exclude {
                Some(id) => {
                    sqlx::query_as(
                        "SELECT start_time, end_time, show_start_date, show_end_date
                         FROM sessions WHERE hall_id = $1 AND id <> $2",
                    )
                    .bind(hall_id)
                    .bind(id)
                    .fetch_all(pool)
                    .await?
                }
                None => {
                    sqlx::query_as(
                        "SELECT start_time, end_time, show_start_date, show_end_date
                         FROM sessions WHERE hall_id = $1",
                    )
                    .bind(hall_id)
                    .fetch_all(pool)
                    .await?
                }
            };

        Ok(rows
            .into_iter()
            .map(
                |(start_time, end_time, show_start_date, show_end_date)| ShowWindow {
                    start_time,
                    end_time,
                    show_start_date,
                    show_end_date,
                },
            )
            .collect())
    }

    /// List sessions under a visibility filter and sort order.
    ///
    /// The WHERE clause mirrors [`ShowFilter::matches`]; the ORDER BY
    /// fragment comes from [`SessionSort::order_by`].
    pub async fn list(
        pool: &PgPool,
        filter: ShowFilter,
        sort: SessionSort,
        today: NaiveDate,
    ) -> Result<Vec<Session>, sqlx::Error> {
        let where_clause = match filter {
            ShowFilter::All => "show_end_date > $1",
            ShowFilter::Today | ShowFilter::Tomorrow => {
                "show_start_date <= $1 AND show_end_date > $1"
            }
        };
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE {where_clause} ORDER BY {}",
            sort.order_by()
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(filter.pivot(today))
            .fetch_all(pool)
            .await
    }

    /// Whether this session has sold tickets.
    ///
    /// A `true` here locks the session against edits.
    pub async fn has_purchases(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM purchases WHERE session_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
