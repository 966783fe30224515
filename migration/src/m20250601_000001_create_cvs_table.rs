use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cvs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Cvs::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Cvs::PersonalDetails)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Cvs::About).json_binary().not_null())
                    .col(ColumnDef::new(Cvs::Education).json_binary().not_null())
                    .col(
                        ColumnDef::new(Cvs::WorkExperience)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Cvs::Skills).json_binary().not_null())
                    .col(ColumnDef::new(Cvs::Interests).json_binary().not_null())
                    .col(ColumnDef::new(Cvs::Projects).json_binary().not_null())
                    .col(
                        ColumnDef::new(Cvs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Cvs::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One CV per user
        manager
            .create_index(
                Index::create()
                    .table(Cvs::Table)
                    .name("uq_cvs_user_id")
                    .col(Cvs::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cvs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cvs {
    Table,
    Id,
    UserId,
    PersonalDetails,
    About,
    Education,
    WorkExperience,
    Skills,
    Interests,
    Projects,
    CreatedAt,
    UpdatedAt,
}
