use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::Args;
use lagoon_client::Upload;

use super::{DeskContext, FormKind};
use crate::forms::{
    AttendanceEditForm, ClientBookingForm, DiscountForm, EmployeeForm, EventForm, FieldKind,
    FormSpec, ModalForm, PurchaseOrderForm, RoomForm, SubmitOutcome,
};
use crate::pages::{ListPage, Listable};

#[derive(Debug, Clone, Args)]
pub struct FormInput {
    /// `key=value`; item rows take `items.0.name=Rice`
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub values: Vec<(String, String)>,

    /// `field=path` of a file to upload
    #[arg(long = "file", value_name = "FIELD=PATH", value_parser = parse_pair)]
    pub files: Vec<(String, String)>,

    /// Page to read a fresh CSRF token from before submitting
    #[arg(long, value_name = "PATH")]
    pub csrf_page: Option<String>,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    pub form: FormKind,
    #[command(flatten)]
    pub input: FormInput,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub form: FormKind,
    pub id: i64,
    #[command(flatten)]
    pub input: FormInput,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in {raw:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// `items.2.price` → (`items`, 2, `price`)
fn row_cell(key: &str) -> Option<(&str, usize, &str)> {
    let mut parts = key.splitn(3, '.');
    let group = parts.next()?;
    let index = parts.next()?.parse().ok()?;
    let column = parts.next()?;
    Some((group, index, column))
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected true or false, got {other:?}"),
    }
}

fn apply_input<S: FormSpec>(form: &mut ModalForm<S>, input: &FormInput) -> anyhow::Result<()> {
    let fields = form.spec().fields();
    let kind_of = |name: &str| fields.iter().find(|f| f.name == name).map(|f| f.kind);
    for (key, value) in &input.values {
        if let Some((group, index, column)) = row_cell(key) {
            if let Some(FieldKind::Rows(columns)) = kind_of(group) {
                if !columns.iter().any(|c| c.name == column) {
                    bail!(
                        "unknown column {column:?} in {group}; columns are: {}",
                        columns.iter().map(|c| c.name).collect::<Vec<_>>().join(", ")
                    );
                }
                form.set_row_cell(group, index, column, value.as_str());
                continue;
            }
        }
        match kind_of(key.as_str()) {
            Some(FieldKind::Flag) => form.set(key, parse_flag(value)?),
            Some(FieldKind::File | FieldKind::Files) => {
                bail!("{key} takes a file; use --file {key}=PATH")
            }
            Some(_) => form.set(key, value.as_str()),
            None => bail!(
                "unknown field {key:?}; fields are: {}",
                fields.iter().map(|f| f.name).collect::<Vec<_>>().join(", ")
            ),
        }
    }
    for (field, path) in &input.files {
        let path = PathBuf::from(path);
        let upload = Upload::from_path(field.as_str(), &path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        form.push_file(field, upload);
    }
    Ok(())
}

async fn submit<S: FormSpec>(
    ctx: &mut DeskContext,
    mut form: ModalForm<S>,
    input: &FormInput,
) -> anyhow::Result<()> {
    apply_input(&mut form, input)?;
    if let Some(page) = &input.csrf_page {
        ctx.client
            .refresh_csrf(page)
            .await
            .with_context(|| format!("no CSRF token on {page}"))?;
    }
    let noun = <S::Record as Listable>::NOUN;
    match form.submit(&ctx.client, &ctx.notifier).await {
        SubmitOutcome::Saved(record) => {
            println!("{}", record.display_row());
            Ok(())
        }
        SubmitOutcome::Invalid | SubmitOutcome::Rejected => {
            for (field, message) in form.errors().iter() {
                eprintln!("  {field}: {message}");
            }
            bail!("{noun} not saved")
        }
        SubmitOutcome::Busy => bail!("{noun} is already being saved"),
        SubmitOutcome::Failed(e) => Err(e.into()),
    }
}

async fn open_update<S: FormSpec>(ctx: &DeskContext, spec: S, id: i64) -> anyhow::Result<ModalForm<S>> {
    let mut page = ListPage::<S::Record>::new();
    page.load(&ctx.client, &ctx.notifier).await?;
    let record = page
        .find(id)
        .ok_or_else(|| anyhow!("{} {id} not found", <S::Record as Listable>::NOUN))?;
    Ok(ModalForm::update(spec, record))
}

pub async fn create(ctx: &mut DeskContext, args: CreateArgs) -> anyhow::Result<()> {
    let input = &args.input;
    match args.form {
        FormKind::Discount => submit(ctx, ModalForm::create(DiscountForm), input).await,
        FormKind::Employee => submit(ctx, ModalForm::create(EmployeeForm), input).await,
        FormKind::PurchaseOrder => submit(ctx, ModalForm::create(PurchaseOrderForm), input).await,
        FormKind::Attendance => submit(ctx, ModalForm::create(AttendanceEditForm), input).await,
        FormKind::Booking => submit(ctx, ModalForm::create(ClientBookingForm), input).await,
        FormKind::Room => submit(ctx, ModalForm::create(RoomForm), input).await,
        FormKind::Event => submit(ctx, ModalForm::create(EventForm), input).await,
    }
}

pub async fn update(ctx: &mut DeskContext, args: UpdateArgs) -> anyhow::Result<()> {
    let (input, id) = (&args.input, args.id);
    match args.form {
        FormKind::Discount => {
            let form = open_update(ctx, DiscountForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::Employee => {
            let form = open_update(ctx, EmployeeForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::PurchaseOrder => {
            let form = open_update(ctx, PurchaseOrderForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::Attendance => {
            let form = open_update(ctx, AttendanceEditForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::Booking => {
            let form = open_update(ctx, ClientBookingForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::Room => {
            let form = open_update(ctx, RoomForm, id).await?;
            submit(ctx, form, input).await
        }
        FormKind::Event => {
            let form = open_update(ctx, EventForm, id).await?;
            submit(ctx, form, input).await
        }
    }
}
