/// One page of a list. Pages are numbered from 1.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub number: u32,
    pub page_count: u32,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    pub fn prev(&self) -> Option<u32> {
        if self.number > 1 { Some(self.number - 1) } else { None }
    }

    pub fn next(&self) -> Option<u32> {
        if self.number < self.page_count { Some(self.number + 1) } else { None }
    }
}

pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    page_count: u32,
}

impl<'a, T> Paginator<'a, T> {
    /// `None` as page size puts everything on a single page.
    pub fn new(items: &'a [T], page_size: Option<u32>) -> Self {
        let page_size = match page_size {
            Some(size) if size > 0 => size as usize,
            _ => items.len().max(1),
        };
        let page_count = items.len().div_ceil(page_size).max(1) as u32;

        Paginator {
            items,
            page_size,
            page_count,
        }
    }

    /// Out of range page numbers fall back to the first page.
    pub fn page(&self, number: u32) -> Page<'a, T> {
        let number = match number {
            0 => 1,
            x if x > self.page_count => 1,
            x => x,
        };

        let start = (number as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        Page {
            number,
            page_count: self.page_count,
            items: &self.items[start.min(end)..end],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_case() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];
        let paginator = Paginator::new(&items, Some(3));
        assert_eq!(paginator.page(1).page_count, 5);
        assert_eq!(paginator.page(1).items, &[1, 2, 3]);
        assert_eq!(paginator.page(4).items, &[10, 11, 12]);
        assert_eq!(paginator.page(5).items, &[13]);

        let last = paginator.page(5);
        assert_eq!(last.prev(), Some(4));
        assert_eq!(last.next(), None);
        assert_eq!(paginator.page(1).prev(), None);
        assert_eq!(paginator.page(1).next(), Some(2));
    }

    #[test]
    fn test_out_of_range_falls_back_to_first() {
        let items = vec![1, 2, 3, 4];
        let paginator = Paginator::new(&items, Some(2));
        assert_eq!(paginator.page(0).number, 1);
        assert_eq!(paginator.page(9).number, 1);
        assert_eq!(paginator.page(9).items, &[1, 2]);
    }

    #[test]
    fn test_single_page() {
        let items = vec![1, 2, 3, 4];
        let paginator = Paginator::new(&items, None);
        assert_eq!(paginator.page(1).page_count, 1);
        assert_eq!(paginator.page(1).items, &[1, 2, 3, 4]);

        let paginator = Paginator::new(&items, Some(0));
        assert_eq!(paginator.page(1).page_count, 1);
    }

    #[test]
    fn test_empty() {
        let items: Vec<u32> = vec![];
        let paginator = Paginator::new(&items, Some(3));
        assert_eq!(paginator.page(1).page_count, 1);
        let page = paginator.page(1);
        assert!(page.items.is_empty());
        assert_eq!(page.next(), None);
    }
}
