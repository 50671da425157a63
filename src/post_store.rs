use std::collections::HashMap;

use crate::content::PostRecord;

/// Posts of one year bucket. `year` is `None` for the undated posts.
#[derive(Debug, PartialEq)]
pub struct YearGroup<'a> {
    pub year: Option<i32>,
    pub posts: Vec<&'a PostRecord>,
}

/// Frozen snapshot of all loaded posts, newest first.
pub struct PostStore {
    posts: Vec<PostRecord>,
    slug_to_index: HashMap<String, usize>,
}

impl PostStore {
    /// Sorts by the raw date string, descending. The comparison is lexical,
    /// which only matches chronological order while every post uses the same
    /// zero-padded `YYYY-MM-DD[ HH:MM]` layout. Ties keep discovery order.
    pub fn new(mut posts: Vec<PostRecord>) -> PostStore {
        posts.sort_by(|a, b| b.date_key().cmp(a.date_key()));

        let slug_to_index = posts.iter()
            .enumerate()
            .map(|(i, post)| (post.slug.clone(), i))
            .collect();

        PostStore {
            posts,
            slug_to_index,
        }
    }

    pub fn all(&self) -> &[PostRecord] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&PostRecord> {
        self.slug_to_index.get(slug).map(|&i| &self.posts[i])
    }

    pub fn latest(&self, n: usize) -> &[PostRecord] {
        &self.posts[..n.min(self.posts.len())]
    }

    /// Buckets in the order years are first met while walking `all()`.
    pub fn grouped_by_year(&self) -> Vec<YearGroup<'_>> {
        group_by_year(self.posts.iter())
    }

    pub fn by_year(&self, year: i32) -> Vec<&PostRecord> {
        self.posts.iter().filter(|p| p.year == Some(year)).collect()
    }
}

pub fn group_by_year<'a>(posts: impl Iterator<Item = &'a PostRecord>) -> Vec<YearGroup<'a>> {
    let mut groups: Vec<YearGroup> = vec![];
    for post in posts {
        match groups.iter_mut().find(|g| g.year == post.year) {
            Some(group) => group.posts.push(post),
            None => groups.push(YearGroup { year: post.year, posts: vec![post] }),
        }
    }
    groups
}
