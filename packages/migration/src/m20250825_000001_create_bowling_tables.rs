use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Frames {
    Table,
    Id,
    GameId,
    Number,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rolls {
    Table,
    Id,
    FrameId,
    RollNumber,
    Pins,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // frames: 10 per game, numbered 1..=10
        manager
            .create_table(
                Table::create()
                    .table(Frames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Frames::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Frames::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Frames::Number).integer().not_null())
                    .col(
                        ColumnDef::new(Frames::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Frames::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_frames_game_id")
                            .from(Frames::Table, Frames::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_frames_game_id_number_unique")
                    .table(Frames::Table)
                    .col(Frames::GameId)
                    .col(Frames::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rolls: append-only, at most 3 per frame
        manager
            .create_table(
                Table::create()
                    .table(Rolls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rolls::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rolls::FrameId).big_integer().not_null())
                    .col(ColumnDef::new(Rolls::RollNumber).integer().not_null())
                    .col(ColumnDef::new(Rolls::Pins).integer().not_null())
                    .col(
                        ColumnDef::new(Rolls::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rolls::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rolls_frame_id")
                            .from(Rolls::Table, Rolls::FrameId)
                            .to(Frames::Table, Frames::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The unique index doubles as the optimistic-concurrency guard:
        // two submissions racing to the same (frame, roll_number) slot cannot
        // both commit.
        manager
            .create_index(
                Index::create()
                    .name("idx_rolls_frame_id_roll_number_unique")
                    .table(Rolls::Table)
                    .col(Rolls::FrameId)
                    .col(Rolls::RollNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rolls::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Frames::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
