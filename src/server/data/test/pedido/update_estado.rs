use super::*;

/// Tests a status transition is persisted.
///
/// Expected: Some(Pedido) with the new status
#[tokio::test]
async fn updates_status_of_existing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pedido = PedidoFactory::new(db)
        .estado(EstadoPedido::Pendiente)
        .build()
        .await?;

    let repository = PedidoRepository::new(db);
    let updated = repository
        .update_estado(pedido.id, EstadoPedido::Completado)
        .await?;

    assert_eq!(updated.map(|p| p.estado), Some(EstadoPedido::Completado));

    let reloaded = repository.find_by_id(pedido.id).await?.unwrap();
    assert_eq!(reloaded.estado, EstadoPedido::Completado);

    Ok(())
}

/// Tests updating an unknown order id.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_unknown_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pedido_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PedidoRepository::new(db)
        .update_estado(404, EstadoPedido::Cancelado)
        .await?;

    assert!(updated.is_none());

    Ok(())
}
