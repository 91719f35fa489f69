use super::*;

use chrono::{Duration, Utc};

/// Tests only the given account's orders are returned, newest first.
///
/// Expected: owner's two orders in descending creation order
#[tokio::test]
async fn returns_only_owned_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = UsuarioFactory::new(db).build().await?;
    let other = UsuarioFactory::new(db).build().await?;

    let older = PedidoFactory::new(db)
        .usuario_id(owner.id)
        .creado_en(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let newer = PedidoFactory::new(db)
        .usuario_id(owner.id)
        .creado_en(Utc::now())
        .build()
        .await?;
    PedidoFactory::new(db).usuario_id(other.id).build().await?;
    PedidoFactory::new(db).build().await?;

    let pedidos = PedidoRepository::new(db).get_by_usuario(owner.id).await?;

    assert_eq!(pedidos.len(), 2);
    assert_eq!(pedidos[0].id, newer.id);
    assert_eq!(pedidos[1].id, older.id);

    Ok(())
}

/// Tests an account without orders gets an empty list.
///
/// Expected: empty vec
#[tokio::test]
async fn returns_empty_list_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = UsuarioFactory::new(db).build().await?;

    let pedidos = PedidoRepository::new(db).get_by_usuario(usuario.id).await?;

    assert!(pedidos.is_empty());

    Ok(())
}
