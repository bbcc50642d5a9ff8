//! Field command handlers.

use tabled::Tabled;

use repack_api::ApiClient;
use repack_api::ids::FieldId;
use repack_api::models::Field;

use crate::cli::{FieldsArgs, FieldsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Offset")]
    offset: i64,
    #[tabled(rename = "Length")]
    length: i64,
    #[tabled(rename = "Type")]
    field_type: String,
}

impl From<&Field> for FieldRow {
    fn from(f: &Field) -> Self {
        Self {
            id: id_of(f),
            name: f.name.clone(),
            offset: f.offset,
            length: f.length,
            field_type: f.field_type.clone(),
        }
    }
}

fn id_of(f: &Field) -> String {
    f.id.map(|id| id.to_string()).unwrap_or_default()
}

fn field_detail(f: &Field) -> String {
    [
        format!("ID:     {}", util::or_dash(&id_of(f))),
        format!("Name:   {}", f.name),
        format!("Offset: {}", f.offset),
        format!("Length: {}", f.length),
        format!("Type:   {}", util::or_dash(&f.field_type)),
    ]
    .join("\n")
}

pub async fn list(client: &ApiClient, global: &GlobalOpts) -> Result<(), CliError> {
    let fields = util::items(client.list_fields().await?);
    let out = output::render_list(&global.output, &fields, |f| FieldRow::from(f), id_of);
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(
    client: &ApiClient,
    args: FieldsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FieldsCommand::List => list(client, global).await,

        FieldsCommand::Get { id } => {
            let id = FieldId(id);
            let field = util::found(client.get_field(id).await, "field", id, "fields list")?;
            let out = output::render_single(&global.output, &field, field_detail, id_of);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FieldsCommand::Create {
            name,
            offset,
            length,
            field_type,
            from_file,
        } => {
            let field = if let Some(ref path) = from_file {
                util::read_json_file(path)?
            } else {
                Field {
                    name: name.unwrap_or_default(),
                    offset: offset.into(),
                    length: length.map(i64::from).unwrap_or_default(),
                    field_type,
                    ..Field::default()
                }
            };
            let resp = client.create_field(&field).await?;
            if let Some(ref created) = resp.data {
                let out = output::render_single(&global.output, created, field_detail, id_of);
                output::print_output(&out, global.quiet);
            }
            util::acknowledge(&resp, "Field created", global.quiet);
            Ok(())
        }

        FieldsCommand::Update { id, from_file } => {
            let field: Field = util::read_json_file(&from_file)?;
            let resp = client.update_field(FieldId(id), &field).await?;
            util::acknowledge(&resp, "Field updated", global.quiet);
            Ok(())
        }

        FieldsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete field {id}?"), global.yes)? {
                return Ok(());
            }
            let ack = client.delete_field(FieldId(id)).await?;
            util::acknowledge(&ack, "Field deleted", global.quiet);
            Ok(())
        }
    }
}
