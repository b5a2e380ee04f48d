//! Orders service.

use async_trait::async_trait;
use cafe::orders::Order;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    database::Db,
    domain::orders::{
        data::{NewOrder, OrderUpdate, OrdersFilter, OrdersPage, PageRequest},
        errors::OrdersServiceError,
        records::{OrderId, OrderRecord},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(
        &self,
        filter: OrdersFilter,
        page: PageRequest,
    ) -> Result<OrdersPage, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_orders(&mut tx, &filter).await?;
        let orders = self.repository.list_orders(&mut tx, &filter, page).await?;

        tx.commit().await?;

        Ok(OrdersPage { orders, total })
    }

    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let order = Order::new(order.table_number, order.items)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_order(&mut tx, &order).await?;

        tx.commit().await?;

        debug!(order = %created.id, total = %created.order.total_price(), "order created");

        Ok(created)
    }

    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.repository.lock_order(&mut tx, order).await?;

        if let Some(table_number) = update.table_number {
            record.order.set_table_number(table_number);
        }

        if let Some(items) = update.items {
            record.order.set_items(items)?;
        }

        if let Some(status) = update.status {
            record.order.set_status(status);
        }

        record.order.recalculate()?;

        let saved = self
            .repository
            .save_order(&mut tx, order, &record.order)
            .await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn update_status(
        &self,
        order: OrderId,
        status: String,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut record = self.repository.lock_order(&mut tx, order).await?;

        record.order.transition_status(&status)?;
        record.order.recalculate()?;

        let saved = self
            .repository
            .save_order(&mut tx, order, &record.order)
            .await?;

        tx.commit().await?;

        debug!(order = %saved.id, status = %saved.order.status(), "order status changed");

        Ok(saved)
    }

    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_order(&mut tx, order).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn mark_paid(&self, orders: Vec<OrderId>) -> Result<u64, OrdersServiceError> {
        if orders.is_empty() {
            return Ok(0);
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.mark_paid(&mut tx, &orders).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }

    async fn total_revenue(&self) -> Result<Decimal, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let revenue = self.repository.total_revenue(&mut tx).await?;

        tx.commit().await?;

        Ok(revenue)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves one page of orders matching the filter, newest first.
    async fn list_orders(
        &self,
        filter: OrdersFilter,
        page: PageRequest,
    ) -> Result<OrdersPage, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderId) -> Result<OrderRecord, OrdersServiceError>;

    /// Creates a pending order with a freshly derived total.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Applies a partial update and re-derives the total before saving.
    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Moves an order to the named status.
    async fn update_status(
        &self,
        order: OrderId,
        status: String,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Deletes an order.
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError>;

    /// Marks every listed order as paid, returning how many rows changed.
    async fn mark_paid(&self, orders: Vec<OrderId>) -> Result<u64, OrdersServiceError>;

    /// Sums the totals of paid orders.
    async fn total_revenue(&self) -> Result<Decimal, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use cafe::{items::OrderItem, orders::OrderError, status::OrderStatus, tables::TableNumber};
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::create_order};

    use super::*;

    fn item(name: &str, cents: i64, quantity: u32) -> OrderItem {
        OrderItem::new(name, Decimal::new(cents, 2), quantity)
    }

    async fn listed(
        ctx: &TestContext,
        filter: OrdersFilter,
    ) -> Result<(u64, Vec<OrderId>), OrdersServiceError> {
        let page = ctx.orders.list_orders(filter, PageRequest::all()).await?;

        Ok((
            page.total,
            page.orders.iter().map(|record| record.id).collect(),
        ))
    }

    async fn stored_total_price(ctx: &TestContext, order: OrderId) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar("SELECT total_price FROM orders WHERE id = $1")
            .bind(order.into_id())
            .fetch_one(ctx.db.pool())
            .await
    }

    #[tokio::test]
    async fn create_order_derives_total_and_starts_pending() -> TestResult {
        let ctx = TestContext::new().await;

        let record = create_order(
            &ctx,
            5,
            vec![item("Latte", 350, 2), item("Croissant", 275, 1)],
        )
        .await?;

        assert_eq!(record.order.total_price(), Decimal::new(975, 2));
        assert_eq!(record.order.status(), OrderStatus::Pending);
        assert_eq!(record.order.table_number().get(), 5);
        assert_eq!(record.created_at, record.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_returns_created_order() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 2, vec![item("Tea", 200, 3)]).await?;

        let fetched = ctx.orders.get_order(created.id).await?;

        assert_eq!(fetched, created);

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_order_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(OrderId::from_id(9_999)).await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn update_status_persists_new_status() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 1, vec![item("Espresso", 250, 1)]).await?;

        let updated = ctx
            .orders
            .update_status(created.id, "ready".to_string())
            .await?;

        assert_eq!(updated.order.status(), OrderStatus::Ready);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = ctx.orders.get_order(created.id).await?;

        assert_eq!(fetched.order.status(), OrderStatus::Ready);

        Ok(())
    }

    #[tokio::test]
    async fn update_status_rejects_unknown_status() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 1, vec![item("Espresso", 250, 1)]).await?;

        let result = ctx
            .orders
            .update_status(created.id, "served".to_string())
            .await;

        assert!(matches!(
            result,
            Err(OrdersServiceError::Order(OrderError::InvalidStatus(_)))
        ));

        let fetched = ctx.orders.get_order(created.id).await?;

        assert_eq!(fetched.order.status(), OrderStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn update_status_on_missing_order_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .update_status(OrderId::from_id(42), "served".to_string())
            .await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn update_order_replaces_items_and_recomputes_total() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 3, vec![item("Tea", 200, 1)]).await?;

        let updated = ctx
            .orders
            .update_order(
                created.id,
                OrderUpdate {
                    table_number: Some(TableNumber::new(7)?),
                    items: Some(vec![item("Mocha", 425, 2)]),
                    status: None,
                },
            )
            .await?;

        assert_eq!(updated.order.table_number().get(), 7);
        assert_eq!(updated.order.total_price(), Decimal::new(850, 2));
        assert_eq!(updated.order.status(), OrderStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn delete_order_removes_it() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 4, vec![item("Tea", 200, 1)]).await?;

        ctx.orders.delete_order(created.id).await?;

        let result = ctx.orders.get_order(created.id).await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx.orders.delete_order(OrderId::from_id(77)).await;

        assert!(matches!(result, Err(OrdersServiceError::NotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_filters_by_status_and_table() -> TestResult {
        let ctx = TestContext::new().await;

        let first = create_order(&ctx, 1, vec![item("Tea", 200, 1)]).await?;
        let second = create_order(&ctx, 2, vec![item("Tea", 200, 1)]).await?;
        let _third = create_order(&ctx, 2, vec![item("Tea", 200, 1)]).await?;

        ctx.orders.update_status(second.id, "paid".to_string()).await?;

        let paid = ctx
            .orders
            .list_orders(
                OrdersFilter {
                    status: Some(OrderStatus::Paid),
                    ..OrdersFilter::default()
                },
                PageRequest::page(1, 10),
            )
            .await?;

        assert_eq!(paid.total, 1);
        assert_eq!(paid.orders.first().map(|record| record.id), Some(second.id));

        let table_one = ctx
            .orders
            .list_orders(
                OrdersFilter {
                    table_number: Some(1),
                    ..OrdersFilter::default()
                },
                PageRequest::page(1, 10),
            )
            .await?;

        assert_eq!(table_one.total, 1);
        assert_eq!(
            table_one.orders.first().map(|record| record.id),
            Some(first.id)
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_is_newest_first_and_paged() -> TestResult {
        let ctx = TestContext::new().await;

        let mut ids = Vec::new();

        for table in 1..=3 {
            ids.push(create_order(&ctx, table, vec![item("Tea", 200, 1)]).await?.id);
        }

        let page = ctx
            .orders
            .list_orders(OrdersFilter::default(), PageRequest::page(1, 2))
            .await?;

        let listed: Vec<OrderId> = page.orders.iter().map(|record| record.id).collect();

        assert_eq!(page.total, 3);
        assert_eq!(listed, vec![ids[2], ids[1]]);

        let last = ctx
            .orders
            .list_orders(OrdersFilter::default(), PageRequest::page(2, 2))
            .await?;

        assert_eq!(last.orders.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn mark_paid_and_total_revenue() -> TestResult {
        let ctx = TestContext::new().await;

        let first = create_order(&ctx, 1, vec![item("Latte", 350, 2)]).await?;
        let second = create_order(&ctx, 2, vec![item("Cake", 425, 1)]).await?;
        let _unpaid = create_order(&ctx, 3, vec![item("Tea", 200, 1)]).await?;

        assert_eq!(ctx.orders.total_revenue().await?, Decimal::ZERO);

        let marked = ctx
            .orders
            .mark_paid(vec![first.id, second.id, OrderId::from_id(123_456)])
            .await?;

        assert_eq!(marked, 2);
        assert_eq!(ctx.orders.total_revenue().await?, Decimal::new(1125, 2));

        Ok(())
    }

    #[tokio::test]
    async fn mark_paid_with_no_ids_changes_nothing() -> TestResult {
        let ctx = TestContext::new().await;

        assert_eq!(ctx.orders.mark_paid(Vec::new()).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_search_matches_id_or_table() -> TestResult {
        let ctx = TestContext::new().await;

        let by_id = create_order(&ctx, 999, vec![item("Tea", 200, 1)]).await?;
        let by_table = create_order(&ctx, by_id.id.into_id(), vec![item("Tea", 200, 1)]).await?;
        let _other = create_order(&ctx, 998, vec![item("Tea", 200, 1)]).await?;

        let (total, ids) = listed(
            &ctx,
            OrdersFilter {
                search: Some(by_id.id.into_id()),
                ..OrdersFilter::default()
            },
        )
        .await?;

        assert_eq!(total, 2);
        assert_eq!(ids, vec![by_table.id, by_id.id]);

        let (total, ids) = listed(
            &ctx,
            OrdersFilter {
                search: Some(10_000),
                ..OrdersFilter::default()
            },
        )
        .await?;

        assert_eq!(total, 0);
        assert!(ids.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_filters_by_created_and_updated_bounds() -> TestResult {
        let ctx = TestContext::new().await;

        let first = create_order(&ctx, 1, vec![item("Tea", 200, 1)]).await?;
        let second = create_order(&ctx, 2, vec![item("Tea", 200, 1)]).await?;

        assert!(second.created_at > first.created_at);

        let created_since_second = OrdersFilter {
            created_after: Some(second.created_at),
            ..OrdersFilter::default()
        };

        assert_eq!(listed(&ctx, created_since_second).await?, (1, vec![second.id]));

        let created_before_second = OrdersFilter {
            created_before: Some(second.created_at),
            ..OrdersFilter::default()
        };

        assert_eq!(listed(&ctx, created_before_second).await?, (1, vec![first.id]));

        let touched = ctx.orders.update_status(first.id, "ready".to_string()).await?;

        let updated_since_touch = OrdersFilter {
            updated_after: Some(touched.updated_at),
            ..OrdersFilter::default()
        };

        assert_eq!(listed(&ctx, updated_since_touch).await?, (1, vec![first.id]));

        let updated_before_touch = OrdersFilter {
            updated_before: Some(touched.updated_at),
            ..OrdersFilter::default()
        };

        assert_eq!(listed(&ctx, updated_before_touch).await?, (1, vec![second.id]));

        let window = OrdersFilter {
            created_after: Some(first.created_at),
            created_before: Some(second.created_at),
            updated_after: Some(touched.updated_at),
            ..OrdersFilter::default()
        };

        assert_eq!(listed(&ctx, window).await?, (1, vec![first.id]));

        Ok(())
    }

    #[tokio::test]
    async fn mark_paid_keeps_total_and_refreshes_updated_at() -> TestResult {
        let ctx = TestContext::new().await;
        let created = create_order(&ctx, 6, vec![item("Latte", 350, 2)]).await?;

        ctx.orders.mark_paid(vec![created.id]).await?;

        let paid = ctx.orders.get_order(created.id).await?;

        assert_eq!(paid.order.status(), OrderStatus::Paid);
        assert_eq!(paid.order.total_price(), created.order.total_price());
        assert_eq!(paid.order.items(), created.order.items());
        assert_eq!(stored_total_price(&ctx, created.id).await?, Decimal::new(700, 2));
        assert_eq!(paid.created_at, created.created_at);
        assert!(paid.updated_at > created.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn stored_items_without_price_read_back_at_zero() -> TestResult {
        let ctx = TestContext::new().await;

        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO orders (table_number, items, total_price, status)
               VALUES (3, '[{"name": "Tea", "quantity": 2}, {"name": "Cake", "price": 4.25, "quantity": 1}]'::jsonb, 4.25, 'ready')
               RETURNING id"#,
        )
        .fetch_one(ctx.db.pool())
        .await?;

        let record = ctx.orders.get_order(OrderId::from_id(id)).await?;

        assert_eq!(
            record.order.items(),
            [
                OrderItem::new("Tea", Decimal::ZERO, 2),
                item("Cake", 425, 1),
            ]
        );
        assert_eq!(record.order.total_price(), Decimal::new(425, 2));
        assert_eq!(record.order.status(), OrderStatus::Ready);

        let (total, ids) = listed(&ctx, OrdersFilter::default()).await?;

        assert_eq!(total, 1);
        assert_eq!(ids, vec![record.id]);

        Ok(())
    }

    #[tokio::test]
    async fn sub_cent_prices_survive_storage() -> TestResult {
        let ctx = TestContext::new().await;

        let sample = OrderItem::new("Sample", Decimal::new(1_499_999_999_999_999_999, 20), 1);
        let created = create_order(&ctx, 2, vec![sample, item("Tea", 200, 1)]).await?;

        assert_eq!(created.order.total_price(), Decimal::new(201, 2));

        let fetched = ctx.orders.get_order(created.id).await?;

        assert_eq!(fetched.order.items(), created.order.items());
        assert_eq!(fetched.order.total_price(), created.order.total_price());
        assert_eq!(stored_total_price(&ctx, created.id).await?, Decimal::new(201, 2));

        let ready = ctx
            .orders
            .update_status(created.id, "ready".to_string())
            .await?;

        assert_eq!(ready.order.total_price(), Decimal::new(201, 2));
        assert_eq!(stored_total_price(&ctx, created.id).await?, Decimal::new(201, 2));

        ctx.orders.mark_paid(vec![created.id]).await?;

        assert_eq!(
            ctx.orders.total_revenue().await?,
            ctx.orders.get_order(created.id).await?.order.total_price()
        );

        Ok(())
    }
}
