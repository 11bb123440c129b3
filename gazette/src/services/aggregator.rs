use itertools::Itertools;

use crate::domain::article::Article;

pub fn aggregate(tables: Vec<Vec<Article>>) -> Vec<Article> {
    tables.into_iter().concat()
}
