use super::*;

/// Tests deletion of an existing order.
///
/// Expected: true, order gone afterwards
#[tokio::test]
async fn deletes_existing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pedido = PedidoFactory::new(db).build().await?;

    let repository = PedidoRepository::new(db);
    let deleted = repository.delete(pedido.id).await?;

    assert!(deleted);
    assert!(repository.find_by_id(pedido.id).await?.is_none());

    Ok(())
}

/// Tests deletion of an unknown order id.
///
/// Expected: false
#[tokio::test]
async fn returns_false_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PedidoRepository::new(db).delete(404).await?);

    Ok(())
}
