use crate::components::{PageConfig, RowActions};
use crate::records::{record, ColumnDescriptor, FieldDescriptor};

record! {
    pub struct Product {
        nome,
        categoria,
        preco,
        status,
        descricao,
    }
}

record! {
    pub struct Service {
        nome,
        categoria,
        status,
        descricao,
    }
}

record! {
    pub struct BlogPost {
        titulo,
        autor,
        data,
        status,
        resumo,
        conteudo,
    }
}

record! {
    pub struct FaqEntry {
        pergunta,
        resposta,
        categoria,
        status,
    }
}

record! {
    pub struct Contact {
        nome,
        email,
        telefone,
        assunto,
        mensagem,
        status,
    }
}

record! {
    /// Newsletter sign-up.
    pub struct Lead {
        email,
        nome,
        origem,
        data,
    }
}

pub const PRODUCTS: PageConfig<Product> = PageConfig {
    columns: &[
        ColumnDescriptor::new("nome", "Nome"),
        ColumnDescriptor::new("categoria", "Categoria"),
        ColumnDescriptor::new("preco", "Preço"),
        ColumnDescriptor::new("status", "Status"),
    ],
    fields: &[
        FieldDescriptor::line("nome", "Nome").required(),
        FieldDescriptor::line("categoria", "Categoria"),
        FieldDescriptor::line("preco", "Preço"),
        FieldDescriptor::line("status", "Status"),
        FieldDescriptor::text("descricao", "Descrição"),
    ],
    searchable: &["nome", "categoria", "descricao"],
    actions: RowActions::ALL,
    blank: || Product {
        status: "Ativo".to_string(),
        ..Product::default()
    },
};

pub const SERVICES: PageConfig<Service> = PageConfig {
    columns: &[
        ColumnDescriptor::new("nome", "Nome"),
        ColumnDescriptor::new("categoria", "Categoria"),
        ColumnDescriptor::new("status", "Status"),
    ],
    fields: &[
        FieldDescriptor::line("nome", "Nome").required(),
        FieldDescriptor::line("categoria", "Categoria"),
        FieldDescriptor::line("status", "Status"),
        FieldDescriptor::text("descricao", "Descrição"),
    ],
    searchable: &["nome", "categoria", "descricao"],
    actions: RowActions::ALL,
    blank: || Service {
        status: "Ativo".to_string(),
        ..Service::default()
    },
};

pub const BLOG: PageConfig<BlogPost> = PageConfig {
    columns: &[
        ColumnDescriptor::new("titulo", "Título"),
        ColumnDescriptor::new("autor", "Autor"),
        ColumnDescriptor::new("data", "Data"),
        ColumnDescriptor::new("status", "Status"),
    ],
    fields: &[
        FieldDescriptor::line("titulo", "Título").required(),
        FieldDescriptor::line("autor", "Autor"),
        FieldDescriptor::line("data", "Data"),
        FieldDescriptor::line("status", "Status"),
        FieldDescriptor::text("resumo", "Resumo"),
        FieldDescriptor::text("conteudo", "Conteúdo"),
    ],
    searchable: &["titulo", "autor", "resumo"],
    actions: RowActions::ALL,
    blank: || BlogPost {
        status: "Rascunho".to_string(),
        ..BlogPost::default()
    },
};

pub const FAQ: PageConfig<FaqEntry> = PageConfig {
    columns: &[
        ColumnDescriptor::new("pergunta", "Pergunta"),
        ColumnDescriptor::new("categoria", "Categoria"),
        ColumnDescriptor::new("status", "Status"),
    ],
    fields: &[
        FieldDescriptor::line("pergunta", "Pergunta").required(),
        FieldDescriptor::text("resposta", "Resposta").required(),
        FieldDescriptor::line("categoria", "Categoria"),
        FieldDescriptor::line("status", "Status"),
    ],
    searchable: &["pergunta", "resposta", "categoria"],
    actions: RowActions::ALL,
    blank: || FaqEntry {
        status: "Publicado".to_string(),
        ..FaqEntry::default()
    },
};

pub const CONTACTS: PageConfig<Contact> = PageConfig {
    columns: &[
        ColumnDescriptor::new("nome", "Nome"),
        ColumnDescriptor::new("email", "E-mail"),
        ColumnDescriptor::new("assunto", "Assunto"),
        ColumnDescriptor::new("status", "Status"),
    ],
    fields: &[
        FieldDescriptor::line("nome", "Nome").required(),
        FieldDescriptor::line("email", "E-mail").required(),
        FieldDescriptor::line("telefone", "Telefone"),
        FieldDescriptor::line("assunto", "Assunto"),
        FieldDescriptor::text("mensagem", "Mensagem"),
        FieldDescriptor::line("status", "Status"),
    ],
    searchable: &["nome", "email", "assunto"],
    actions: RowActions::ALL,
    blank: || Contact {
        status: "Novo".to_string(),
        ..Contact::default()
    },
};

/// Leads arrive from the public sign-up form, so the backoffice only reads and prunes them.
pub const LEADS: PageConfig<Lead> = PageConfig {
    columns: &[
        ColumnDescriptor::new("email", "E-mail"),
        ColumnDescriptor::new("nome", "Nome"),
        ColumnDescriptor::new("origem", "Origem"),
        ColumnDescriptor::new("data", "Data"),
    ],
    fields: &[
        FieldDescriptor::line("email", "E-mail").required(),
        FieldDescriptor::line("nome", "Nome"),
        FieldDescriptor::line("origem", "Origem"),
        FieldDescriptor::line("data", "Data"),
    ],
    searchable: &["email", "nome", "origem"],
    actions: RowActions::READ_ONLY,
    blank: Lead::default,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Record;

    fn assert_descriptors_resolve<R: Record>(config: &PageConfig<R>) {
        let blank = (config.blank)();
        for column in config.columns {
            assert!(blank.field(column.field).is_some(), "unknown column {}", column.field);
        }
        for field in config.fields {
            assert!(blank.field(field.field).is_some(), "unknown field {}", field.field);
        }
        for name in config.searchable {
            assert!(blank.field(name).is_some(), "unknown searchable {name}");
        }
        assert_eq!(blank.id(), 0);
    }

    #[test]
    fn every_descriptor_names_a_real_field() {
        assert_descriptors_resolve(&PRODUCTS);
        assert_descriptors_resolve(&SERVICES);
        assert_descriptors_resolve(&BLOG);
        assert_descriptors_resolve(&FAQ);
        assert_descriptors_resolve(&CONTACTS);
        assert_descriptors_resolve(&LEADS);
    }

    #[test]
    fn factories_seed_sensible_status() {
        assert_eq!((PRODUCTS.blank)().status, "Ativo");
        assert_eq!((BLOG.blank)().status, "Rascunho");
        assert!((LEADS.blank)().email.is_empty());
    }
}
