//! Data-access operations for the `items` table.
//!
//! Every operation runs against a caller-supplied session. A missing row is
//! a normal result (`None`), never an error; the route layer decides how
//! absence is surfaced. Storage failures propagate as `sqlx::Error`.

use sqlx::PgConnection;

use crate::models::{CreateItem, Item, ItemPatch};

/// Returns all items in storage order.
pub async fn list_items(conn: &mut PgConnection) -> Result<Vec<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>("SELECT id, name, description, price, quantity FROM items")
        .fetch_all(conn)
        .await
}

/// Returns the item with the given id, or `None` if there is none.
pub async fn get_item(conn: &mut PgConnection, id: i64) -> Result<Option<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>("SELECT id, name, description, price, quantity FROM items WHERE id = $1")
        .bind(id)
        .fetch_optional(conn)
        .await
}

/// Inserts a new item and returns it with its storage-assigned id.
pub async fn create_item(conn: &mut PgConnection, new_item: CreateItem) -> Result<Item, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        INSERT INTO items (name, description, price, quantity)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, description, price, quantity
        "#,
    )
    .bind(new_item.name)
    .bind(new_item.description)
    .bind(new_item.price)
    .bind(new_item.quantity)
    .fetch_one(conn)
    .await
}

/// Looks up the item and overwrites only the fields present in `patch`.
/// Returns `None`, with no side effect, if the id does not exist.
pub async fn update_item(
    conn: &mut PgConnection,
    id: i64,
    patch: ItemPatch,
) -> Result<Option<Item>, sqlx::Error> {
    let Some(mut item) = get_item(&mut *conn, id).await? else {
        return Ok(None);
    };
    patch.apply(&mut item);

    // The row can vanish between the read and the write; report that as
    // absent rather than a fault. Concurrent updates are last-write-wins.
    sqlx::query_as::<_, Item>(
        r#"
        UPDATE items
        SET name = $1, description = $2, price = $3, quantity = $4
        WHERE id = $5
        RETURNING id, name, description, price, quantity
        "#,
    )
    .bind(item.name)
    .bind(item.description)
    .bind(item.price)
    .bind(item.quantity)
    .bind(item.id)
    .fetch_optional(conn)
    .await
}

/// Deletes the item and returns it as it was just before deletion, or
/// `None` if the id does not exist.
pub async fn delete_item(conn: &mut PgConnection, id: i64) -> Result<Option<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        DELETE FROM items
        WHERE id = $1
        RETURNING id, name, description, price, quantity
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}
