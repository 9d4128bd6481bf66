//! Aggregation over streams of outcomes.
//!
//! The `AggregateStream` future drains a stream of outcomes with the same
//! rules as [`aggregate`](crate::combinator::aggregate()). In
//! [`AggregateMode::BailEarly`] it completes at the first problem and never
//! polls the stream again.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::Stream;
use pin_project::pin_project;

use crate::combinator::AggregateMode;
use crate::combinator::aggregate::Aggregator;
use crate::types::Outcome;

/// A future that aggregates every outcome of a stream.
///
/// Created by [`aggregate_stream`]. Once it has completed, the stream is
/// never polled again; polling the future after completion panics.
#[pin_project]
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct AggregateStream<S, T> {
    #[pin]
    stream: S,
    aggregator: Option<Aggregator<T>>,
}

impl<S, T> AggregateStream<S, T> {
    pub(crate) const fn new(stream: S, mode: AggregateMode) -> Self {
        Self {
            stream,
            aggregator: Some(Aggregator::new(mode)),
        }
    }
}

impl<S, T> Future for AggregateStream<S, T>
where
    S: Stream<Item = Outcome<T>>,
{
    type Output = Outcome<Vec<T>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        let Some(mut aggregator) = this.aggregator.take() else {
            panic!("AggregateStream polled after completion");
        };
        loop {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(outcome)) => {
                    if aggregator.push(outcome).is_break() {
                        break;
                    }
                }
                Poll::Ready(None) => break,
                Poll::Pending => {
                    *this.aggregator = Some(aggregator);
                    return Poll::Pending;
                }
            }
        }
        Poll::Ready(aggregator.finish())
    }
}

/// Aggregates a stream of outcomes into one outcome of all values.
pub fn aggregate_stream<S, T>(stream: S, mode: AggregateMode) -> AggregateStream<S, T>
where
    S: Stream<Item = Outcome<T>>,
{
    AggregateStream::new(stream, mode)
}

/// Aggregates a stream of value-less outcomes into a single one.
pub async fn aggregate_unit_stream<S>(stream: S, mode: AggregateMode) -> Outcome<()>
where
    S: Stream<Item = Outcome<()>>,
{
    aggregate_stream(stream, mode).await.map(|_| ())
}
