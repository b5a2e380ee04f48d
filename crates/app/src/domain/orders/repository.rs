//! Orders Repository

use cafe::{
    items::{ParseMode, parse_items},
    orders::Order,
    status::OrderStatus,
    tables::TableNumber,
};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar,
    types::Json,
};

use crate::domain::orders::{
    data::{OrdersFilter, PageRequest},
    records::{OrderId, OrderRecord},
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const COUNT_ORDERS_SQL: &str = include_str!("sql/count_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LOCK_ORDER_SQL: &str = include_str!("sql/lock_order.sql");
const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const SAVE_ORDER_SQL: &str = include_str!("sql/save_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");
const MARK_PAID_SQL: &str = include_str!("sql/mark_paid.sql");
const TOTAL_REVENUE_SQL: &str = include_str!("sql/total_revenue.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &OrdersFilter,
        page: PageRequest,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(filter.table_number)
            .bind(filter.status.map(OrderStatus::as_str))
            .bind(filter.search)
            .bind(filter.created_after.map(SqlxTimestamp::from))
            .bind(filter.created_before.map(SqlxTimestamp::from))
            .bind(filter.updated_after.map(SqlxTimestamp::from))
            .bind(filter.updated_before.map(SqlxTimestamp::from))
            .bind(to_i64("limit", page.limit)?)
            .bind(to_i64("offset", page.offset)?)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &OrdersFilter,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_ORDERS_SQL)
            .bind(filter.table_number)
            .bind(filter.status.map(OrderStatus::as_str))
            .bind(filter.search)
            .bind(filter.created_after.map(SqlxTimestamp::from))
            .bind(filter.created_before.map(SqlxTimestamp::from))
            .bind(filter.updated_after.map(SqlxTimestamp::from))
            .bind(filter.updated_before.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_id())
            .fetch_one(&mut **tx)
            .await
    }

    /// Loads an order and holds its row lock until the transaction ends.
    pub(crate) async fn lock_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LOCK_ORDER_SQL)
            .bind(order.into_id())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &Order,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.table_number().get())
            .bind(Json(order.items()))
            .bind(order.total_price())
            .bind(order.status().as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Writes every mutable column of an order and refreshes `updated_at`.
    pub(crate) async fn save_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: OrderId,
        order: &Order,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(SAVE_ORDER_SQL)
            .bind(id.into_id())
            .bind(order.table_number().get())
            .bind(Json(order.items()))
            .bind(order.total_price())
            .bind(order.status().as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order.into_id())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn mark_paid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderId],
    ) -> Result<u64, sqlx::Error> {
        let ids: Vec<i64> = orders.iter().map(|order| order.into_id()).collect();

        let rows_affected = query(MARK_PAID_SQL)
            .bind(ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn total_revenue(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Decimal, sqlx::Error> {
        query_scalar(TOTAL_REVENUE_SQL).fetch_one(&mut **tx).await
    }
}

fn to_i64(index: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::Encode(format!("{index}: {e}").into()))
}

fn decode_error(
    index: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let table_number: i32 = row.try_get("table_number")?;
        let table_number = TableNumber::new(i64::from(table_number))
            .map_err(|e| decode_error("table_number", e))?;

        // Rows written outside the API may lack prices; they read back as zero-priced lines.
        let items: Value = row.try_get("items")?;
        let items = parse_items(&items, ParseMode::Lenient).map_err(|e| decode_error("items", e))?;

        let status: String = row.try_get("status")?;
        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| decode_error("status", e))?;

        let order = Order::from_parts(table_number, items, status)
            .map_err(|e| decode_error("items", e))?;

        Ok(Self {
            id: OrderId::from_id(row.try_get("id")?),
            order,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
